//! State

use std::sync::Arc;

use bikers_hub_app::context::AppContext;

/// Whether bookings must carry a verified identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum BookingPolicy {
    #[default]
    AllowAnonymous,
    RequireIdentity,
}

impl BookingPolicy {
    #[must_use]
    pub(crate) fn from_flag(requires_identity: bool) -> Self {
        if requires_identity {
            Self::RequireIdentity
        } else {
            Self::AllowAnonymous
        }
    }
}

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) booking: BookingPolicy,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, booking: BookingPolicy) -> Self {
        Self { app, booking }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, booking: BookingPolicy) -> Arc<Self> {
        Arc::new(Self::new(app, booking))
    }
}
