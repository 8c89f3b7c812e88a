//! The database seam the report runner talks to.

use anyhow::{Context, Result};
use async_trait::async_trait;
use mongodb::{Client, Collection, Database, bson::Document};

use crate::config::Settings;
use crate::mongo::{aggregation, client, index, performance, query};
use crate::mongo::query::FindQuery;

/// Read, index and explain operations on one collection of book documents.
#[async_trait]
pub trait BookStore: Send + Sync {
    fn database_name(&self) -> &str;

    fn collection_name(&self) -> &str;

    /// `database.collection`, used in logs and error context.
    fn namespace(&self) -> String {
        format!("{}.{}", self.database_name(), self.collection_name())
    }

    async fn find(&self, query: &FindQuery) -> Result<Vec<Document>>;

    async fn aggregate(&self, pipeline: Vec<Document>) -> Result<Vec<Document>>;

    /// Returns the index name.
    async fn create_index(&self, keys: Document) -> Result<String>;

    async fn explain(&self, filter: Document) -> Result<Document>;

    /// Releases the underlying connection. Called once, after the last step.
    async fn close(&self);
}

/// `BookStore` backed by a live MongoDB deployment.
pub struct MongoBookStore {
    client: Client,
    database: Database,
    collection: Collection<Document>,
}

impl MongoBookStore {
    pub async fn connect(settings: &Settings) -> Result<Self> {
        let client = client::connect(&settings.uri).await?;
        Ok(Self::with_client(client, &settings.database, &settings.collection))
    }

    pub fn with_client(client: Client, database: &str, collection: &str) -> Self {
        let database = client.database(database);
        let collection = database.collection::<Document>(collection);
        Self {
            client,
            database,
            collection,
        }
    }

    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }
}

#[async_trait]
impl BookStore for MongoBookStore {
    fn database_name(&self) -> &str {
        self.database.name()
    }

    fn collection_name(&self) -> &str {
        self.collection.name()
    }

    async fn find(&self, find_query: &FindQuery) -> Result<Vec<Document>> {
        query::find(&self.collection, find_query)
            .await
            .with_context(|| format!("find on {} failed", self.namespace()))
    }

    async fn aggregate(&self, pipeline: Vec<Document>) -> Result<Vec<Document>> {
        aggregation::aggregate(&self.collection, pipeline)
            .await
            .with_context(|| format!("aggregate on {} failed", self.namespace()))
    }

    async fn create_index(&self, keys: Document) -> Result<String> {
        index::create_index(&self.collection, keys.clone())
            .await
            .with_context(|| format!("createIndex {} on {} failed", keys, self.namespace()))
    }

    async fn explain(&self, filter: Document) -> Result<Document> {
        performance::explain_find(&self.database, self.collection.name(), filter)
            .await
            .with_context(|| format!("explain on {} failed", self.namespace()))
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
    }
}
