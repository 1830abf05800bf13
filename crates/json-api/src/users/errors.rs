//! User Errors

use salvo::http::StatusError;
use tracing::error;

use bikers_hub_app::domain::users::UsersServiceError;

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::MissingEmail => {
            StatusError::bad_request().brief("User payload must include an email")
        }
        UsersServiceError::InvalidDocument(_) => {
            StatusError::bad_request().brief("Invalid user payload")
        }
        UsersServiceError::Database(source) => {
            error!("user storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
