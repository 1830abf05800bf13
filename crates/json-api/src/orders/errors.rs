//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use bikers_hub_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::InvalidId(_) => StatusError::bad_request().brief("Invalid order id"),
        OrdersServiceError::InvalidDocument(_) => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::Database(source) => {
            error!("order storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
