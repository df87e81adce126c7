//! Checkout Errors

use salvo::http::StatusError;
use tracing::error;

use crumb_app::domain::checkout::CheckoutError;

pub(crate) fn into_status_error(error: CheckoutError) -> StatusError {
    match error {
        CheckoutError::EmptyCart => StatusError::conflict().brief("Your cart is empty"),
        CheckoutError::InvalidCoupon => {
            StatusError::unprocessable_entity().brief("Invalid or expired coupon code")
        }
        CheckoutError::ProductNotFound => {
            StatusError::not_found().brief("A product in your cart is no longer available")
        }
        CheckoutError::InvalidData => StatusError::bad_request().brief("Invalid checkout payload"),
        CheckoutError::Sql(source) => {
            error!("checkout storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
