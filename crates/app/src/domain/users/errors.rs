//! Users service errors.

use mongodb::error::Error;
use thiserror::Error;

use crate::documents::DocumentError;

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("user document has no email")]
    MissingEmail,

    #[error("invalid user document")]
    InvalidDocument(#[source] DocumentError),

    #[error("storage error")]
    Database(#[source] Error),
}

impl From<Error> for UsersServiceError {
    fn from(error: Error) -> Self {
        Self::Database(error)
    }
}
