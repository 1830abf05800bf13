//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use bikers_hub_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::InvalidId(_) => {
            StatusError::bad_request().brief("Invalid product id")
        }
        ProductsServiceError::InvalidDocument(_) => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::Database(source) => {
            error!("product storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
