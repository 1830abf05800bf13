//! Test helpers.

use std::sync::Arc;

use bikers_hub_app::{
    auth::{Identity, MockIdentityVerifier},
    context::AppContext,
    documents::{InsertAck, UpdateAck},
    domain::{
        orders::MockOrdersService, products::MockProductsService, reviews::MockReviewsService,
        users::MockUsersService,
    },
};
use salvo::{affix_state::inject, prelude::*};
use serde_json::json;

use crate::state::{BookingPolicy, State};

pub(crate) const TEST_OBJECT_ID: &str = "61a0f1c2b3d4e5f6a7b8c9d0";

/// Service mocks backing a test [`State`].
///
/// Mocks left at their default have no expectations, so any call into them
/// fails the test.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) products: MockProductsService,
    pub(crate) reviews: MockReviewsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) users: MockUsersService,
    pub(crate) identity: MockIdentityVerifier,
    pub(crate) booking: BookingPolicy,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        let app = AppContext {
            products: Arc::new(self.products),
            reviews: Arc::new(self.reviews),
            orders: Arc::new(self.orders),
            users: Arc::new(self.users),
            identity: Arc::new(self.identity),
        };

        State::from_app_context(app, self.booking)
    }

    pub(crate) fn service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }

    /// Like [`Mocks::service`], with `identity` already attached to every
    /// request in place of the identity middleware.
    pub(crate) fn service_as(self, identity: Identity, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject(identity))
                .push(route),
        )
    }
}

pub(crate) fn insert_ack() -> InsertAck {
    InsertAck {
        acknowledged: true,
        inserted_id: json!(TEST_OBJECT_ID),
    }
}

pub(crate) fn update_ack(matched: u64, modified: u64, upserted: bool) -> UpdateAck {
    UpdateAck {
        acknowledged: true,
        matched_count: matched,
        modified_count: modified,
        upserted_count: u64::from(upserted),
        upserted_id: upserted.then(|| json!(TEST_OBJECT_ID)),
    }
}
