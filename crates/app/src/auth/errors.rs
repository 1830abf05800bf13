//! Identity verification errors.

use thiserror::Error;

use crate::auth::{FirebaseError, IdTokenError};

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("id token rejected")]
    Token(#[from] IdTokenError),

    #[error("signing key not published by identity provider")]
    UnknownKey,

    #[error("signing key could not be used")]
    Key(#[source] jsonwebtoken::errors::Error),

    #[error("identity provider error")]
    Firebase(#[from] FirebaseError),
}
