//! Delete Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    acknowledgments::DeleteAckResponse, extensions::*, orders::errors::into_status_error,
    state::State,
};

/// Delete Order Handler
///
/// Deletes an order by its identifier. Deleting an unknown order reports
/// `deletedCount: 0`.
#[endpoint(
    tags("orders"),
    summary = "Delete Order",
    responses(
        (status_code = StatusCode::OK, description = "Deletion acknowledgment"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed order id"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<DeleteAckResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let ack = state
        .app
        .orders
        .delete_order(&id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ack.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use bikers_hub_app::{
        documents::{DeleteAck, parse_object_id},
        domain::orders::{MockOrdersService, OrdersServiceError},
    };

    use crate::test_helpers::{Mocks, TEST_OBJECT_ID};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        Mocks {
            orders,
            ..Mocks::default()
        }
        .service(Router::with_path("order/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_returns_delete_ack() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_delete_order()
            .once()
            .withf(|id| id == TEST_OBJECT_ID)
            .return_once(|_| {
                Ok(DeleteAck {
                    acknowledged: true,
                    deleted_count: 1,
                })
            });

        let mut res = TestClient::delete(format!("http://example.com/order/{TEST_OBJECT_ID}"))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            res.take_json::<Value>().await?,
            json!({ "acknowledged": true, "deletedCount": 1 })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_unknown_order_reports_zero() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_delete_order().once().return_once(|_| {
            Ok(DeleteAck {
                acknowledged: true,
                deleted_count: 0,
            })
        });

        let mut res = TestClient::delete(format!("http://example.com/order/{TEST_OBJECT_ID}"))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            res.take_json::<Value>().await?,
            json!({ "acknowledged": true, "deletedCount": 0 })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_malformed_id_returns_400() {
        let Err(parse_error) = parse_object_id("123") else {
            panic!("expected \"123\" to be rejected as an object id");
        };

        let mut orders = MockOrdersService::new();

        orders
            .expect_delete_order()
            .once()
            .return_once(move |_| Err(OrdersServiceError::InvalidId(parse_error)));

        let res = TestClient::delete("http://example.com/order/123")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
