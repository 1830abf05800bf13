//! Review Errors

use salvo::http::StatusError;
use tracing::error;

use bikers_hub_app::domain::reviews::ReviewsServiceError;

pub(crate) fn into_status_error(error: ReviewsServiceError) -> StatusError {
    match error {
        ReviewsServiceError::InvalidDocument(_) => {
            StatusError::bad_request().brief("Invalid review payload")
        }
        ReviewsServiceError::Database(source) => {
            error!("review storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
