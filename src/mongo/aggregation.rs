use mongodb::{Collection, bson::Document};

use crate::mongo::cursor;

pub async fn aggregate(
    collection: &Collection<Document>,
    pipeline: Vec<Document>,
) -> mongodb::error::Result<Vec<Document>> {
    let cursor = collection.aggregate(pipeline, None).await?;
    cursor::collect_all(cursor).await
}
