//! Database Config

use bikers_hub_app::database::{DEFAULT_DATABASE_NAME, atlas_uri};
use clap::Args;
use thiserror::Error;

/// Default Atlas cluster host used with discrete credentials.
pub const DEFAULT_CLUSTER_HOST: &str = "cluster0.lcafd.mongodb.net";

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// MongoDB connection string; takes precedence over discrete credentials
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    pub mongodb_uri: Option<String>,

    /// MongoDB Atlas user
    #[arg(long, env = "DB_USER")]
    pub db_user: Option<String>,

    /// MongoDB Atlas password
    #[arg(long, env = "DB_PASS", hide_env_values = true)]
    pub db_pass: Option<String>,

    /// MongoDB Atlas cluster host
    #[arg(long, env = "DB_CLUSTER_HOST", default_value = DEFAULT_CLUSTER_HOST)]
    pub db_cluster_host: String,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = DEFAULT_DATABASE_NAME)]
    pub db_name: String,
}

/// Raised when no usable connection settings were supplied.
#[derive(Debug, Error)]
#[error("set MONGODB_URI, or both DB_USER and DB_PASS")]
pub struct MissingCredentials;

impl DatabaseConfig {
    /// Resolve the connection string to use.
    ///
    /// # Errors
    ///
    /// Returns [`MissingCredentials`] when neither a URI nor a user and
    /// password pair is configured.
    pub fn connection_uri(&self) -> Result<String, MissingCredentials> {
        if let Some(uri) = &self.mongodb_uri {
            return Ok(uri.clone());
        }

        match (&self.db_user, &self.db_pass) {
            (Some(user), Some(pass)) => Ok(atlas_uri(user, pass, &self.db_cluster_host)),
            _ => Err(MissingCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn config(uri: Option<&str>, user: Option<&str>, pass: Option<&str>) -> DatabaseConfig {
        DatabaseConfig {
            mongodb_uri: uri.map(ToString::to_string),
            db_user: user.map(ToString::to_string),
            db_pass: pass.map(ToString::to_string),
            db_cluster_host: DEFAULT_CLUSTER_HOST.to_string(),
            db_name: DEFAULT_DATABASE_NAME.to_string(),
        }
    }

    #[test]
    fn explicit_uri_wins() -> TestResult {
        let uri = config(Some("mongodb://localhost"), Some("u"), Some("p")).connection_uri()?;

        assert_eq!(uri, "mongodb://localhost");

        Ok(())
    }

    #[test]
    fn credentials_build_atlas_uri() -> TestResult {
        let uri = config(None, Some("rider"), Some("pw")).connection_uri()?;

        assert_eq!(
            uri,
            "mongodb+srv://rider:pw@cluster0.lcafd.mongodb.net/?retryWrites=true&w=majority"
        );

        Ok(())
    }

    #[test]
    fn missing_password_is_rejected() {
        assert!(config(None, Some("rider"), None).connection_uri().is_err());
    }
}
