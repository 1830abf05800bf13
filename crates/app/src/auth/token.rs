//! Firebase ID token header and claim checks.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use serde::Deserialize;
use thiserror::Error;

use crate::auth::FirebaseConfig;

/// Claims read from a Firebase ID token.
#[derive(Debug, Clone, Deserialize)]
pub struct IdTokenClaims {
    /// Firebase user ID.
    pub sub: String,

    /// Email of the signed-in user. Absent for phone or anonymous sign-in.
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Error)]
pub enum IdTokenError {
    #[error("id token is malformed")]
    Malformed(#[source] jsonwebtoken::errors::Error),

    #[error("id token is signed with unsupported algorithm {0:?}")]
    UnsupportedAlgorithm(Algorithm),

    #[error("id token header has no key id")]
    MissingKeyId,

    #[error("id token failed validation")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    #[error("id token has an empty subject")]
    MissingSubject,

    #[error("id token carries no email")]
    MissingEmail,
}

/// Read the signing key ID from an RS256 token header.
///
/// # Errors
///
/// Returns an error if the header cannot be decoded, is not RS256, or has no `kid`.
pub fn signing_key_id(token: &str) -> Result<String, IdTokenError> {
    let header = decode_header(token).map_err(IdTokenError::Malformed)?;

    if header.alg != Algorithm::RS256 {
        return Err(IdTokenError::UnsupportedAlgorithm(header.alg));
    }

    header.kid.ok_or(IdTokenError::MissingKeyId)
}

/// Validation rules for ID tokens issued to the configured project.
#[must_use]
pub fn id_token_validation(config: &FirebaseConfig) -> Validation {
    validation_for(config, Algorithm::RS256)
}

fn validation_for(config: &FirebaseConfig, algorithm: Algorithm) -> Validation {
    let mut validation = Validation::new(algorithm);

    validation.set_audience(&[&config.project_id]);
    validation.set_issuer(&[config.issuer()]);
    validation.set_required_spec_claims(&["exp", "aud", "iss", "sub"]);

    validation
}

/// Check a token's signature and claims, returning its email.
///
/// # Errors
///
/// Returns an error if the signature or any registered claim is invalid, or
/// if the token has no subject or no email.
pub fn verified_email(
    token: &str,
    key: &DecodingKey,
    validation: &Validation,
) -> Result<String, IdTokenError> {
    let claims = decode::<IdTokenClaims>(token, key, validation)
        .map_err(IdTokenError::Invalid)?
        .claims;

    if claims.sub.is_empty() {
        return Err(IdTokenError::MissingSubject);
    }

    claims
        .email
        .filter(|email| !email.is_empty())
        .ok_or(IdTokenError::MissingEmail)
}
