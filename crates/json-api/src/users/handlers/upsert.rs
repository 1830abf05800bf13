//! Upsert User Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use serde_json::Value;

use crate::{
    acknowledgments::UpdateAckResponse, extensions::*, state::State,
    users::errors::into_status_error,
};

/// Upsert User Handler
///
/// Replaces the user whose email matches the body's `email`, or inserts the
/// body when there is none.
#[endpoint(
    tags("users"),
    summary = "Create Or Replace User",
    responses(
        (status_code = StatusCode::OK, description = "Upsert acknowledgment"),
        (status_code = StatusCode::BAD_REQUEST, description = "Body has no string email"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<Value>,
    depot: &mut Depot,
) -> Result<Json<UpdateAckResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let ack = state
        .app
        .users
        .upsert_user(json.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ack.into()))
}
