//! Orders service errors.

use mongodb::{bson::oid, error::Error};
use thiserror::Error;

use crate::documents::DocumentError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("invalid order identifier")]
    InvalidId(#[source] oid::Error),

    #[error("invalid order document")]
    InvalidDocument(#[source] DocumentError),

    #[error("storage error")]
    Database(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        Self::Database(error)
    }
}
