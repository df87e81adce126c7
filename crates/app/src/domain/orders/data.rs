//! Order Data

use jiff::civil::Date;

use crate::domain::{
    coupons::records::CouponUuid,
    offers::records::OfferUuid,
    orders::records::{OrderItemUuid, OrderUuid},
    products::records::ProductUuid,
};

/// New Order Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub customer_name: String,
    pub customer_email: String,
    pub whatsapp_number: Option<String>,
    pub pickup_date: Date,
    pub subtotal: u64,
    pub discount_amount: u64,
    pub total_amount: u64,
    pub coupon_uuid: Option<CouponUuid>,
    pub offer_uuid: Option<OfferUuid>,
    pub tracking_number: String,
}

/// New Order Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub uuid: OrderItemUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub price: u64,
}
