use mongodb::{Database, bson::{doc, Document}};

pub const EXPLAIN_VERBOSITY: &str = "executionStats";

pub fn explain_command(collection_name: &str, filter: Document) -> Document {
    doc! {
        "explain": {
            "find": collection_name,
            "filter": filter
        },
        "verbosity": EXPLAIN_VERBOSITY
    }
}

/// Runs `find` under `explain` and returns the plan with execution statistics.
pub async fn explain_find(
    database: &Database,
    collection_name: &str,
    filter: Document,
) -> mongodb::error::Result<Document> {
    database
        .run_command(explain_command(collection_name, filter), None)
        .await
}
