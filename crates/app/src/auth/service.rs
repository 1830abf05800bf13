//! Identity verification service.

use async_trait::async_trait;
use jsonwebtoken::{DecodingKey, Validation};
use mockall::automock;

use crate::auth::{
    FirebaseClient, FirebaseConfig, IdentityError, id_token_validation, signing_key_id,
    verified_email,
};

/// Verifies Firebase ID tokens against the project's published signing keys.
#[derive(Debug, Clone)]
pub struct FirebaseIdentityVerifier {
    client: FirebaseClient,
    validation: Validation,
}

impl FirebaseIdentityVerifier {
    #[must_use]
    pub fn new(config: FirebaseConfig) -> Self {
        let validation = id_token_validation(&config);

        Self {
            client: FirebaseClient::new(config),
            validation,
        }
    }
}

#[async_trait]
impl IdentityVerifier for FirebaseIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<String, IdentityError> {
        // Reject obviously unusable tokens before going to the network.
        let key_id = signing_key_id(token)?;

        let keys = self.client.signing_keys().await?;

        let jwk = keys.find(&key_id).ok_or(IdentityError::UnknownKey)?;
        let key = DecodingKey::from_jwk(jwk).map_err(IdentityError::Key)?;

        Ok(verified_email(token, &key, &self.validation)?)
    }
}

#[automock]
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verify a bearer token and return the email it was issued to.
    async fn verify(&self, token: &str) -> Result<String, IdentityError>;
}
