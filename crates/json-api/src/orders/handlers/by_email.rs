//! Orders By Email Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use serde_json::Value;

use bikers_hub_app::documents::document_to_json;

use crate::{extensions::*, state::State};

/// Orders By Email Handler
///
/// Returns the orders placed with the given email. Without an `email`
/// parameter only orders that have no email are returned.
#[endpoint(tags("orders"), summary = "List Orders By Email")]
pub(crate) async fn handler(
    email: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<Value>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let orders = state
        .app
        .orders
        .find_orders_by_email(email.into_inner())
        .await
        .or_500("failed to fetch orders by email")?;

    Ok(Json(orders.into_iter().map(document_to_json).collect()))
}
