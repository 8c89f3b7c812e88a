use anyhow::{Context, Result};
use mongodb::bson::{Bson, Document};
use serde_json::Value;

/// Convert BSON Document → relaxed Extended JSON
pub fn document_to_json(doc: &Document) -> Value {
    Bson::Document(doc.clone()).into_relaxed_extjson()
}

pub fn documents_to_json(docs: &[Document]) -> Value {
    Value::Array(docs.iter().map(document_to_json).collect())
}

pub fn to_pretty_string(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize to JSON")
}
