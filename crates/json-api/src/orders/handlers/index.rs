//! All Orders Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::Value;

use bikers_hub_app::documents::document_to_json;

use crate::{extensions::*, state::State};

/// All Orders Handler
///
/// Returns every order regardless of who placed it.
#[endpoint(tags("orders"), summary = "List All Orders")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<Value>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let orders = state
        .app
        .orders
        .list_orders()
        .await
        .or_500("failed to fetch orders")?;

    Ok(Json(orders.into_iter().map(document_to_json).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use bikers_hub_app::{bson::doc, domain::orders::MockOrdersService};

    use crate::test_helpers::Mocks;

    use super::*;

    #[tokio::test]
    async fn test_all_orders_returns_every_order() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_list_orders().once().return_once(|| {
            Ok(vec![
                doc! { "email": "a@example.com" },
                doc! { "email": "b@example.com" },
            ])
        });

        orders.expect_find_orders_by_email().never();

        let service = Mocks {
            orders,
            ..Mocks::default()
        }
        .service(Router::with_path("allOrders").get(handler));

        let mut res = TestClient::get("http://example.com/allOrders")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            res.take_json::<Value>().await?,
            json!([{ "email": "a@example.com" }, { "email": "b@example.com" }])
        );

        Ok(())
    }
}
