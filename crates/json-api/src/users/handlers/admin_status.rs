//! Admin Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State};

/// Admin Status Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminStatusResponse {
    /// Whether the user exists and has the admin role
    pub admin: bool,
}

/// Admin Status Handler
///
/// Reports whether the user with the given email is an admin. Unknown
/// emails report `false`.
#[endpoint(tags("users"), summary = "Get Admin Status")]
pub(crate) async fn handler(
    email: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<AdminStatusResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let admin = state
        .app
        .users
        .is_admin(&email.into_inner())
        .await
        .or_500("failed to look up user role")?;

    Ok(Json(AdminStatusResponse { admin }))
}
