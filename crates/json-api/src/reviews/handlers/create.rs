//! Create Review Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use serde_json::Value;

use crate::{
    acknowledgments::InsertAckResponse, extensions::*, reviews::errors::into_status_error,
    state::State,
};

/// Create Review Handler
///
/// Stores the request body as a new review.
#[endpoint(
    tags("reviews"),
    summary = "Create Review",
    responses(
        (status_code = StatusCode::OK, description = "Review stored"),
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
        .reviews
        .create_review(json.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ack.into()))
}
