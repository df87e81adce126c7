//! Checkout Quote Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crumb_app::domain::checkout::{CheckoutService as _, pricing::PricingBreakdown};

use crate::{checkout::errors::into_status_error, extensions::*, state::State};

/// One priced line of the checkout preview
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuoteLineResponse {
    /// Product UUID
    pub product_uuid: Uuid,

    /// Product name
    pub name: String,

    /// Unit price in minor currency units
    pub unit_price: u64,

    /// Units of this product in the cart
    pub quantity: u32,

    /// `unit_price × quantity`
    pub line_subtotal: u64,
}

/// Checkout Quote Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuoteResponse {
    /// Priced cart lines
    pub lines: Vec<QuoteLineResponse>,

    /// Item total before discounts
    pub subtotal: u64,

    /// Discount granted by the best applicable offer
    pub offer_discount: u64,

    /// Title of the applied offer, if any
    pub applied_offer: Option<String>,

    /// Discount granted by the stashed coupon
    pub coupon_discount: u64,

    /// Code of the applied coupon, if any
    pub applied_coupon: Option<String>,

    /// Delivery surcharge, if the deployment charges one
    pub delivery_charge: u64,

    /// Final payable amount
    pub total: u64,
}

impl From<PricingBreakdown> for QuoteResponse {
    fn from(breakdown: PricingBreakdown) -> Self {
        QuoteResponse {
            subtotal: breakdown.subtotal,
            offer_discount: breakdown.offer_discount,
            applied_offer: breakdown.applied_offer.map(|offer| offer.title),
            coupon_discount: breakdown.coupon_discount,
            applied_coupon: breakdown.applied_coupon.map(|coupon| coupon.code),
            delivery_charge: breakdown.delivery_charge,
            total: breakdown.total,
            lines: breakdown
                .lines
                .into_iter()
                .map(|line| QuoteLineResponse {
                    product_uuid: line.product_uuid.into(),
                    name: line.product_name.clone(),
                    unit_price: line.unit_price,
                    quantity: line.quantity,
                    line_subtotal: line.line_subtotal(),
                })
                .collect(),
        }
    }
}

/// Checkout Quote Handler
///
/// Prices the session's cart with offer and coupon preview; changes
/// nothing.
#[endpoint(tags("checkout"), summary = "Checkout Quote")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<QuoteResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = req.session_uuid_or_400()?;

    let breakdown = state
        .app
        .checkout
        .quote(session, jiff::Timestamp::now())
        .await
        .map_err(into_status_error)?;

    Ok(Json(breakdown.into()))
}
