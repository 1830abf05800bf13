//! Schemaless documents and store acknowledgments.
//!
//! Collections hold opaque documents: request bodies are stored as given and
//! documents are handed back to clients as plain JSON, with `ObjectId` values
//! rendered as 24 character hex strings.

use mongodb::{
    bson::{self, Bson, Document, oid::ObjectId},
    results::{DeleteResult, InsertOneResult, UpdateResult},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while turning client JSON into a storable document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document must be a JSON object")]
    NotAnObject,

    #[error("document cannot be encoded as BSON")]
    Encode(#[source] bson::ser::Error),
}

/// Convert a JSON request body into a BSON document.
///
/// # Errors
///
/// Returns [`DocumentError::NotAnObject`] for arrays, strings and other
/// non-object values, and [`DocumentError::Encode`] when a value has no BSON
/// representation (e.g. an unsigned integer above `i64::MAX`).
pub fn document_from_json(value: Value) -> Result<Document, DocumentError> {
    let Value::Object(map) = value else {
        return Err(DocumentError::NotAnObject);
    };

    bson::to_document(&map).map_err(DocumentError::Encode)
}

/// Render a stored document as JSON.
#[must_use]
pub fn document_to_json(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect::<Map<String, Value>>(),
    )
}

/// Render a single BSON value as JSON.
#[must_use]
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(document) => document_to_json(document),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// Parse a path identifier as an `ObjectId`.
///
/// # Errors
///
/// Returns an error unless `id` is exactly 24 hex characters.
pub fn parse_object_id(id: &str) -> Result<ObjectId, bson::oid::Error> {
    ObjectId::parse_str(id)
}

/// Result of inserting one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: Value,
}

impl From<InsertOneResult> for InsertAck {
    fn from(result: InsertOneResult) -> Self {
        Self {
            acknowledged: true,
            inserted_id: bson_to_json(result.inserted_id),
        }
    }
}

/// Result of updating, replacing or upserting one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<Value>,
}

impl From<UpdateResult> for UpdateAck {
    fn from(result: UpdateResult) -> Self {
        let upserted_id = result.upserted_id.map(bson_to_json);

        Self {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: u64::from(upserted_id.is_some()),
            upserted_id,
        }
    }
}

/// Result of deleting one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteAck {
    fn from(result: DeleteResult) -> Self {
        Self {
            acknowledged: true,
            deleted_count: result.deleted_count,
        }
    }
}
