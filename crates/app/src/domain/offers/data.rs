//! Special Offer Data

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::offers::records::OfferUuid;

/// New Special Offer Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOffer {
    pub uuid: OfferUuid,
    pub title: String,
    pub discount_percentage: Decimal,
    pub discount_amount: u64,
    pub minimum_order_value: u64,
    pub active: bool,
    pub valid_from: Timestamp,
    pub valid_until: Timestamp,
}
