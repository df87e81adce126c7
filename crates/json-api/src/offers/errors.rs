//! Offer Errors

use salvo::http::StatusError;
use tracing::error;

use crumb_app::domain::offers::OffersServiceError;

pub(crate) fn into_status_error(error: OffersServiceError) -> StatusError {
    match error {
        OffersServiceError::AlreadyExists => StatusError::conflict().brief("Offer already exists"),
        OffersServiceError::InvalidData => StatusError::bad_request().brief("Invalid offer payload"),
        OffersServiceError::Sql(source) => {
            error!("offers storage error: {source}");

            StatusError::internal_server_error()
        }
        OffersServiceError::NotFound => StatusError::not_found().brief("Offer not found"),
    }
}
