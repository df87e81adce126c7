//! Special Offer Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{domain::amounts::percentage_of, uuids::TypedUuid};

/// Special Offer UUID
pub type OfferUuid = TypedUuid<SpecialOfferRecord>;

/// Special Offer Record
///
/// A store-wide, automatically-applied discount based on order value,
/// independent of any code entry. Discounts are either a percentage of the
/// order total or a fixed amount; the percentage takes precedence when both
/// are set.
#[derive(Debug, Clone)]
pub struct SpecialOfferRecord {
    pub uuid: OfferUuid,
    pub title: String,
    pub discount_percentage: Decimal,
    /// Fixed discount in minor units, used when `discount_percentage` is zero.
    pub discount_amount: u64,
    pub minimum_order_value: u64,
    pub active: bool,
    pub valid_from: Timestamp,
    pub valid_until: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl SpecialOfferRecord {
    /// Whether the offer applies at all at the given instant.
    #[must_use]
    pub fn is_valid_at(&self, now: Timestamp) -> bool {
        self.active && self.valid_from <= now && now <= self.valid_until
    }

    /// Discount granted on an order of `total` minor units at instant `now`.
    ///
    /// Zero when the offer is inactive, outside its validity window, or the
    /// total is below the minimum order value. Never exceeds `total`.
    #[must_use]
    pub fn discount_for(&self, total: u64, now: Timestamp) -> u64 {
        if !self.is_valid_at(now) || total < self.minimum_order_value {
            return 0;
        }

        let discount = if self.discount_percentage > Decimal::ZERO {
            percentage_of(total, self.discount_percentage)
        } else {
            self.discount_amount
        };

        discount.min(total)
    }
}
