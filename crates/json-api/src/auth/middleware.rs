//! Identity middleware.

use std::sync::Arc;

use bikers_hub_app::auth::Identity;
use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::{error, warn};

use crate::{extensions::*, state::State};

/// Attach the caller's identity to the depot.
///
/// Requests without a usable bearer token, or whose token fails
/// verification, continue as [`Identity::Anonymous`]. This middleware never
/// rejects a request on its own.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let identity = match extract_bearer_token(req) {
        Some(token) => verify(depot, token).await,
        None => Identity::Anonymous,
    };

    depot.insert_identity(identity);

    ctrl.call_next(req, depot, res).await;
}

async fn verify(depot: &Depot, token: &str) -> Identity {
    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            error!("application state missing while verifying identity");

            return Identity::Anonymous;
        }
    };

    match state.app.identity.verify(token).await {
        Ok(email) => Identity::Verified(email),
        Err(source) => {
            warn!("bearer token rejected, continuing anonymously: {source}");

            Identity::Anonymous
        }
    }
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
