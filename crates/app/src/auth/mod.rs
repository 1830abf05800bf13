//! Identity verification

mod errors;
pub mod firebase;
mod models;
mod service;
mod token;

pub use errors::*;
pub use firebase::{DEFAULT_JWKS_URL, FirebaseClient, FirebaseConfig, FirebaseError};
pub use models::*;
pub use service::*;
pub use token::*;
