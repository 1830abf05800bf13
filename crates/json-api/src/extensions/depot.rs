//! Depot helper extensions.

use std::any::Any;

use bikers_hub_app::auth::Identity;
use salvo::prelude::{Depot, StatusError};

/// Helpers for request-scoped values stored in the depot.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_identity(&mut self, identity: Identity);

    /// The identity attached by the identity middleware, or anonymous when
    /// the middleware did not run.
    fn identity(&self) -> Identity;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_identity(&mut self, identity: Identity) {
        self.inject(identity);
    }

    fn identity(&self) -> Identity {
        self.obtain::<Identity>().cloned().unwrap_or_default()
    }
}
