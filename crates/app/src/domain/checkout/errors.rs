//! Checkout errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout requires at least one cart line.
    #[error("cart is empty")]
    EmptyCart,

    /// The supplied coupon code is unknown, inactive, expired, or fully
    /// redeemed. The checkout is aborted and the cart preserved.
    #[error("invalid or expired coupon code")]
    InvalidCoupon,

    /// A cart line references a product that is no longer in the catalog.
    #[error("product no longer available")]
    ProductNotFound,

    #[error("invalid order data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CheckoutError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::ProductNotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(
                ErrorKind::CheckViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::ForeignKeyViolation,
            ) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}
