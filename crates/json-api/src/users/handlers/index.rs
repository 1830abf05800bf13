//! User Index Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::Value;

use bikers_hub_app::documents::document_to_json;

use crate::{extensions::*, state::State};

/// User Index Handler
///
/// Returns every user.
#[endpoint(tags("users"), summary = "List Users")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<Value>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let users = state
        .app
        .users
        .list_users()
        .await
        .or_500("failed to fetch users")?;

    Ok(Json(users.into_iter().map(document_to_json).collect()))
}
