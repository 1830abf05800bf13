//! App Router

use salvo::Router;

use crate::{auth, orders, products, reviews, users};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("{id}").get(products::get::handler)),
        )
        .push(Router::with_path("reviews").get(reviews::index::handler))
        .push(Router::with_path("review").post(reviews::create::handler))
        .push(Router::with_path("allOrders").get(orders::index::handler))
        .push(Router::with_path("orders").get(orders::by_email::handler))
        .push(
            Router::with_path("booking")
                .hoop(auth::middleware::handler)
                .post(orders::create::handler),
        )
        .push(Router::with_path("order/{id}").delete(orders::delete::handler))
        .push(
            Router::with_path("users")
                .get(users::index::handler)
                .post(users::create::handler)
                .put(users::upsert::handler)
                .push(
                    Router::with_path("admin")
                        .hoop(auth::middleware::handler)
                        .put(users::promote::handler),
                )
                .push(Router::with_path("{email}").get(users::admin_status::handler)),
        )
}

#[cfg(test)]
mod tests {
    use bikers_hub_app::{
        auth::MockIdentityVerifier,
        bson::doc,
        domain::{
            orders::MockOrdersService,
            users::{MockUsersService, Promotion},
        },
    };
    use salvo::{
        http::header::AUTHORIZATION,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, insert_ack};

    use super::*;

    #[tokio::test]
    async fn test_admin_route_is_not_captured_by_email_route() -> TestResult {
        let mut identity = MockIdentityVerifier::new();

        identity
            .expect_verify()
            .once()
            .withf(|token| token == "admin-token")
            .return_once(|_| Ok("a@x.com".to_string()));

        let mut users = MockUsersService::new();

        users.expect_is_admin().never();
        users
            .expect_promote_to_admin()
            .once()
            .withf(|requester, target| requester == "a@x.com" && target == "b@x.com")
            .return_once(|_, _| Ok(Promotion::Forbidden));

        let service = Mocks {
            users,
            identity,
            ..Mocks::default()
        }
        .service(app_router());

        let res = TestClient::put("http://example.com/users/admin")
            .add_header(AUTHORIZATION, "Bearer admin-token", true)
            .json(&json!({ "email": "b@x.com" }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_email_route_reports_admin_status() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_is_admin()
            .once()
            .withf(|email| email == "b@x.com")
            .return_once(|_| Ok(true));

        let service = Mocks {
            users,
            ..Mocks::default()
        }
        .service(app_router());

        let mut res = TestClient::get("http://example.com/users/b@x.com")
            .send(&service)
            .await;

        assert_eq!(res.take_json::<Value>().await?, json!({ "admin": true }));

        Ok(())
    }

    #[tokio::test]
    async fn test_booking_runs_identity_middleware() {
        let mut identity = MockIdentityVerifier::new();

        identity
            .expect_verify()
            .once()
            .return_once(|_| Ok("rider@x.com".to_string()));

        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .return_once(|_| Ok(insert_ack()));

        let service = Mocks {
            orders,
            identity,
            ..Mocks::default()
        }
        .service(app_router());

        let res = TestClient::post("http://example.com/booking")
            .add_header(AUTHORIZATION, "Bearer rider-token", true)
            .json(&json!({ "product": "TVS Apache" }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn test_read_routes_skip_identity_verification() -> TestResult {
        let mut identity = MockIdentityVerifier::new();

        identity.expect_verify().never();

        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders()
            .once()
            .return_once(|| Ok(vec![doc! { "email": "a@x.com" }]));

        let service = Mocks {
            orders,
            identity,
            ..Mocks::default()
        }
        .service(app_router());

        let mut res = TestClient::get("http://example.com/allOrders")
            .add_header(AUTHORIZATION, "Bearer ignored", true)
            .send(&service)
            .await;

        assert_eq!(
            res.take_json::<Value>().await?,
            json!([{ "email": "a@x.com" }])
        );

        Ok(())
    }
}
