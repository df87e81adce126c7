//! Coupon Data

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::coupons::records::CouponUuid;

/// New Coupon Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCoupon {
    pub uuid: CouponUuid,
    pub code: String,
    pub discount_percentage: Decimal,
    pub valid_from: Timestamp,
    pub valid_until: Timestamp,
    pub active: bool,
    pub usage_limit: u32,
}
