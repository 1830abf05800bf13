//! Booking Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use serde_json::Value;

use bikers_hub_app::auth::Identity;

use crate::{
    acknowledgments::InsertAckResponse,
    extensions::*,
    orders::errors::into_status_error,
    state::{BookingPolicy, State},
};

/// Booking Handler
///
/// Stores the request body as a new order. Anonymous bookings are rejected
/// only when the server requires a verified identity for bookings.
#[endpoint(
    tags("orders"),
    summary = "Place Booking",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Body is not a JSON object"),
        (status_code = StatusCode::FORBIDDEN, description = "Verified identity required"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<Value>,
    depot: &mut Depot,
) -> Result<Json<InsertAckResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    if state.booking == BookingPolicy::RequireIdentity && depot.identity() == Identity::Anonymous {
        return Err(StatusError::forbidden().brief("sign in to place a booking"));
    }

    let ack = state
        .app
        .orders
        .create_order(json.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ack.into()))
}
