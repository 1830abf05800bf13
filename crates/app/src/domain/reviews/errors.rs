//! Reviews service errors.

use mongodb::error::Error;
use thiserror::Error;

use crate::documents::DocumentError;

#[derive(Debug, Error)]
pub enum ReviewsServiceError {
    #[error("invalid review document")]
    InvalidDocument(#[source] DocumentError),

    #[error("storage error")]
    Database(#[source] Error),
}

impl From<Error> for ReviewsServiceError {
    fn from(error: Error) -> Self {
        Self::Database(error)
    }
}
