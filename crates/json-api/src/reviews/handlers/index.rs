//! Review Index Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::Value;

use bikers_hub_app::documents::document_to_json;

use crate::{extensions::*, state::State};

/// Review Index Handler
///
/// Returns every review.
#[endpoint(tags("reviews"), summary = "List Reviews")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<Value>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let reviews = state
        .app
        .reviews
        .list_reviews()
        .await
        .or_500("failed to fetch reviews")?;

    Ok(Json(reviews.into_iter().map(document_to_json).collect()))
}
