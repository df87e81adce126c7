//! Coupon Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{domain::amounts::percentage_of, uuids::TypedUuid};

/// Coupon UUID
pub type CouponUuid = TypedUuid<CouponRecord>;

/// Coupon Record
///
/// A customer-entered code granting a percentage discount, subject to a
/// global redemption cap.
#[derive(Debug, Clone)]
pub struct CouponRecord {
    pub uuid: CouponUuid,
    /// Uppercase code, unique across coupons.
    pub code: String,
    pub discount_percentage: Decimal,
    pub valid_from: Timestamp,
    pub valid_until: Timestamp,
    pub active: bool,
    pub usage_limit: u32,
    pub used_count: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl CouponRecord {
    /// Discount granted on an order of `subtotal` minor units.
    #[must_use]
    pub fn discount_for(&self, subtotal: u64) -> u64 {
        percentage_of(subtotal, self.discount_percentage).min(subtotal)
    }
}

/// Coupon codes are matched case-insensitively by normalising to uppercase.
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
