use mongodb::{Collection, IndexModel, bson::Document};

/// Creates an index on `keys` and returns the name the server gave it.
/// Creating an index that already exists with the same keys is a no-op.
pub async fn create_index(
    collection: &Collection<Document>,
    keys: Document,
) -> mongodb::error::Result<String> {
    let index_model = IndexModel::builder()
        .keys(keys)
        .build();

    let result = collection
        .create_index(index_model, None)
        .await?;

    Ok(result.index_name)
}

pub async fn list_index_names(
    collection: &Collection<Document>,
) -> mongodb::error::Result<Vec<String>> {
    collection.list_index_names().await
}
