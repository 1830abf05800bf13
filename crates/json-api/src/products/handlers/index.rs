//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::Value;

use bikers_hub_app::documents::document_to_json;

use crate::{extensions::*, state::State};

/// Product Index Handler
///
/// Returns every product.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<Value>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(products.into_iter().map(document_to_json).collect()))
}
