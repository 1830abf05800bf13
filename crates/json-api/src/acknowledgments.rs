//! Store acknowledgment responses.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use bikers_hub_app::documents::{DeleteAck, InsertAck, UpdateAck};

/// Insert Acknowledgment
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InsertAckResponse {
    pub acknowledged: bool,

    /// Identifier generated for the new document
    pub inserted_id: Value,
}

impl From<InsertAck> for InsertAckResponse {
    fn from(ack: InsertAck) -> Self {
        Self {
            acknowledged: ack.acknowledged,
            inserted_id: ack.inserted_id,
        }
    }
}

/// Update Acknowledgment
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateAckResponse {
    pub acknowledged: bool,

    /// Documents matching the filter
    pub matched_count: u64,

    /// Documents actually changed
    pub modified_count: u64,

    /// 1 when the operation inserted a new document
    pub upserted_count: u64,

    /// Identifier of the inserted document, if any
    pub upserted_id: Option<Value>,
}

impl From<UpdateAck> for UpdateAckResponse {
    fn from(ack: UpdateAck) -> Self {
        Self {
            acknowledged: ack.acknowledged,
            matched_count: ack.matched_count,
            modified_count: ack.modified_count,
            upserted_count: ack.upserted_count,
            upserted_id: ack.upserted_id,
        }
    }
}

/// Delete Acknowledgment
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeleteAckResponse {
    pub acknowledged: bool,

    /// Number of documents removed, 0 or 1
    pub deleted_count: u64,
}

impl From<DeleteAck> for DeleteAckResponse {
    fn from(ack: DeleteAck) -> Self {
        Self {
            acknowledged: ack.acknowledged,
            deleted_count: ack.deleted_count,
        }
    }
}
