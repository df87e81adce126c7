//! Coupon Errors

use salvo::http::StatusError;
use tracing::error;

use crumb_app::domain::coupons::CouponsServiceError;

pub(crate) fn into_status_error(error: CouponsServiceError) -> StatusError {
    match error {
        CouponsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Coupon code already exists")
        }
        CouponsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid coupon payload")
        }
        CouponsServiceError::Sql(source) => {
            error!("coupons storage error: {source}");

            StatusError::internal_server_error()
        }
        CouponsServiceError::NotFound => {
            StatusError::unprocessable_entity().brief("Invalid or expired coupon code")
        }
    }
}
