//! Promote User Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use bikers_hub_app::domain::users::Promotion;

use crate::{
    acknowledgments::UpdateAckResponse, extensions::*, state::State,
    users::errors::into_status_error,
};

const FORBIDDEN_MESSAGE: &str = "you don't have access to make an admin!!";

/// Promote User Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromoteUserRequest {
    /// Email of the user to promote
    pub email: String,
}

/// Forbidden Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    pub message: String,
}

/// Promote User Handler
///
/// Grants the admin role to the user named in the body. Only a caller whose
/// verified email belongs to an admin may do this. Anonymous callers are
/// refused before the body is looked at.
#[endpoint(
    tags("users"),
    summary = "Promote User To Admin",
    security(("bearer_auth" = [])),
    request_body = PromoteUserRequest,
    responses(
        (status_code = StatusCode::OK, description = "Update acknowledgment", body = UpdateAckResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Body has no email"),
        (status_code = StatusCode::FORBIDDEN, description = "Caller is not an admin", body = MessageResponse),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<Value>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(requester) = depot.identity().email().map(ToString::to_string) else {
        info!("anonymous admin promotion rejected");

        forbidden(res);

        return Ok(());
    };

    let target = serde_json::from_value::<PromoteUserRequest>(json.into_inner())
        .map_err(|error| {
            info!(error = %error, "malformed admin promotion payload");

            StatusError::bad_request().brief("Promotion payload must include an email")
        })?
        .email;

    let outcome = state
        .app
        .users
        .promote_to_admin(&requester, &target)
        .await
        .map_err(into_status_error)?;

    match outcome {
        Promotion::Promoted(ack) => res.render(Json(UpdateAckResponse::from(ack))),
        rejected @ (Promotion::Forbidden | Promotion::RequesterNotFound) => {
            info!(requester = %requester, outcome = ?rejected, "admin promotion rejected");

            forbidden(res);
        }
    }

    Ok(())
}

fn forbidden(res: &mut Response) {
    res.status_code(StatusCode::FORBIDDEN);
    res.render(Json(MessageResponse {
        message: FORBIDDEN_MESSAGE.to_string(),
    }));
}
