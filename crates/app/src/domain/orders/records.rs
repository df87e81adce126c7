//! Order Records

use jiff::{Timestamp, civil::Date};

use crate::{
    domain::{
        coupons::records::CouponUuid, offers::records::OfferUuid,
        orders::status::OrderStatus, products::records::ProductUuid,
    },
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Record
///
/// Created once at checkout. After creation only `status` and `updated_at`
/// change; amounts and items are frozen.
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub customer_name: String,
    pub customer_email: String,
    pub whatsapp_number: Option<String>,
    pub pickup_date: Date,
    /// Item total before discounts, in minor units.
    pub subtotal: u64,
    /// Combined coupon + offer discount.
    pub discount_amount: u64,
    /// Final payable amount.
    pub total_amount: u64,
    pub status: OrderStatus,
    pub coupon_uuid: Option<CouponUuid>,
    pub offer_uuid: Option<OfferUuid>,
    pub tracking_number: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub items: Vec<OrderItemRecord>,
}

impl OrderRecord {
    /// Short order reference for messages and subjects, derived from the
    /// UUID.
    #[must_use]
    pub fn short_reference(&self) -> String {
        let hex = self.uuid.into_uuid().simple().to_string();

        hex.chars().take(8).collect::<String>().to_uppercase()
    }
}

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItemRecord>;

/// Order Item Record
///
/// A priced (product, quantity) pair frozen at order-creation time.
#[derive(Debug, Clone)]
pub struct OrderItemRecord {
    pub uuid: OrderItemUuid,
    pub order_uuid: OrderUuid,
    pub product_uuid: ProductUuid,
    /// Product name at read time, for display.
    pub product_name: String,
    pub quantity: u32,
    /// Unit price snapshot in minor units; never re-derived from the
    /// product.
    pub price: u64,
}

impl OrderItemRecord {
    /// `price × quantity`.
    #[must_use]
    pub fn line_subtotal(&self) -> u64 {
        self.price * u64::from(self.quantity)
    }
}
