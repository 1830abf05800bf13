//! Create Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use serde_json::Value;

use crate::{
    acknowledgments::InsertAckResponse, extensions::*, products::errors::into_status_error,
    state::State,
};

/// Create Product Handler
///
/// Stores the request body as a new product.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::OK, description = "Product stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Body is not a JSON object"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<Value>,
    depot: &mut Depot,
) -> Result<Json<InsertAckResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let ack = state
        .app
        .products
        .create_product(json.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ack.into()))
}
