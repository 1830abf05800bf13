//! Auth Config

use bikers_hub_app::auth::{DEFAULT_JWKS_URL, FirebaseConfig};
use clap::{ArgAction, Args, builder::BoolishValueParser};

/// Identity provider and booking policy settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Firebase project whose ID tokens are accepted
    #[arg(long, env = "FIREBASE_SERVICE_ACCOUNT_PROJECT_ID")]
    pub firebase_project_id: String,

    /// JWK set used to verify ID token signatures
    #[arg(long, env = "FIREBASE_JWKS_URL", default_value = DEFAULT_JWKS_URL)]
    pub firebase_jwks_url: String,

    /// Reject bookings that carry no verified identity
    ///
    /// Accepts the usual boolean spellings (`1`/`0`, `yes`/`no`, `on`/`off`).
    #[arg(
        long,
        env = "BOOKING_REQUIRES_IDENTITY",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true"
    )]
    pub booking_requires_identity: bool,
}

impl AuthConfig {
    /// Identity provider settings for the app context.
    #[must_use]
    pub fn firebase(&self) -> FirebaseConfig {
        FirebaseConfig {
            project_id: self.firebase_project_id.clone(),
            jwks_url: self.firebase_jwks_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct AuthOnly {
        #[command(flatten)]
        auth: AuthConfig,
    }

    fn parse(args: &[&str]) -> Result<AuthConfig, clap::Error> {
        let base = ["bikers-hub-json", "--firebase-project-id", "bikers-hub"];

        Ok(AuthOnly::try_parse_from(base.iter().chain(args))?.auth)
    }

    #[test]
    fn booking_policy_defaults_to_off() -> TestResult {
        assert!(!parse(&[])?.booking_requires_identity);

        Ok(())
    }

    #[test]
    fn bare_booking_flag_turns_policy_on() -> TestResult {
        assert!(parse(&["--booking-requires-identity"])?.booking_requires_identity);

        Ok(())
    }

    #[test]
    fn booking_flag_accepts_boolish_values() -> TestResult {
        for value in ["true", "1", "yes", "on"] {
            let config = parse(&["--booking-requires-identity", value])?;

            assert!(config.booking_requires_identity, "{value} should enable");
        }

        for value in ["false", "0", "no", "off"] {
            let config = parse(&["--booking-requires-identity", value])?;

            assert!(!config.booking_requires_identity, "{value} should disable");
        }

        Ok(())
    }

    #[test]
    fn booking_flag_rejects_nonsense() {
        assert!(parse(&["--booking-requires-identity", "maybe"]).is_err());
    }

    #[test]
    fn firebase_config_carries_project_and_default_jwks_url() -> TestResult {
        let firebase = parse(&[])?.firebase();

        assert_eq!(firebase.project_id, "bikers-hub");
        assert_eq!(firebase.jwks_url, DEFAULT_JWKS_URL);

        Ok(())
    }
}
