//! Firebase Authentication signing key client.

use jsonwebtoken::jwk::JwkSet;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

/// Google endpoint publishing the JWKs that sign Firebase ID tokens.
pub const DEFAULT_JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

/// Configuration for verifying tokens issued to one Firebase project.
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    /// Firebase project ID, used as the expected audience.
    pub project_id: String,

    /// URL of the JWK set used to check token signatures.
    pub jwks_url: String,
}

impl FirebaseConfig {
    /// Expected `iss` claim for tokens issued to this project.
    #[must_use]
    pub fn issuer(&self) -> String {
        format!("https://securetoken.google.com/{}", self.project_id)
    }
}

/// HTTP client for the Firebase signing key endpoint.
#[derive(Debug, Clone)]
pub struct FirebaseClient {
    config: FirebaseConfig,
    http: Client,
}

impl FirebaseClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: FirebaseConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Fetch the currently published signing keys.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn signing_keys(&self) -> Result<JwkSet, FirebaseError> {
        debug!(url = %self.config.jwks_url, "fetching identity provider signing keys");

        let response = self.http.get(&self.config.jwks_url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(FirebaseError::UnexpectedResponse(format!(
                "signing key request failed with status {status}: {text}"
            )));
        }

        Ok(response.json().await?)
    }
}

/// Errors that can occur when talking to the identity provider.
#[derive(Debug, Error)]
pub enum FirebaseError {
    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-2xx response.
    #[error("unexpected response from identity provider: {0}")]
    UnexpectedResponse(String),
}
