use futures::TryStreamExt;
use mongodb::{Cursor, bson::Document};

/// Drains the cursor, stopping at the first error the server reports.
pub async fn collect_all(cursor: Cursor<Document>) -> mongodb::error::Result<Vec<Document>> {
    cursor.try_collect().await
}
