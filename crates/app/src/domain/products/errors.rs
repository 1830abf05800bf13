//! Products service errors.

use mongodb::{bson::oid, error::Error};
use thiserror::Error;

use crate::documents::DocumentError;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("invalid product identifier")]
    InvalidId(#[source] oid::Error),

    #[error("invalid product document")]
    InvalidDocument(#[source] DocumentError),

    #[error("storage error")]
    Database(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        Self::Database(error)
    }
}
