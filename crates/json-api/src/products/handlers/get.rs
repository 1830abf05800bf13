//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use serde_json::Value;

use bikers_hub_app::documents::document_to_json;

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Get Product Handler
///
/// Returns a single product by its identifier.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "The product"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed product id"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Value>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(&id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(document_to_json(product)))
}
