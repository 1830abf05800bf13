//! Create User Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use serde_json::Value;

use crate::{
    acknowledgments::InsertAckResponse, extensions::*, state::State,
    users::errors::into_status_error,
};

/// Create User Handler
///
/// Inserts the request body as a new user without checking for an existing
/// user with the same email.
#[endpoint(
    tags("users"),
    summary = "Create User",
    responses(
        (status_code = StatusCode::OK, description = "User stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Body is not a JSON object"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<Value>,
    depot: &mut Depot,
) -> Result<Json<InsertAckResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let ack = state
        .app
        .users
        .create_user(json.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ack.into()))
}
