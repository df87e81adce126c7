//! Get Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crumb_app::domain::orders::{
    OrdersService as _,
    records::{OrderItemRecord, OrderRecord},
};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Order Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    /// Product UUID
    pub product_uuid: Uuid,

    /// Product name
    pub name: String,

    /// Units ordered
    pub quantity: u32,

    /// Unit price captured at order time
    pub price: u64,

    /// `price × quantity`
    pub line_subtotal: u64,
}

impl From<OrderItemRecord> for OrderItemResponse {
    fn from(item: OrderItemRecord) -> Self {
        OrderItemResponse {
            product_uuid: item.product_uuid.into(),
            line_subtotal: item.line_subtotal(),
            name: item.product_name,
            quantity: item.quantity,
            price: item.price,
        }
    }
}

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// Customer name
    pub customer_name: String,

    /// Customer email
    pub customer_email: String,

    /// Customer WhatsApp number, if given
    pub whatsapp_number: Option<String>,

    /// Pickup date, `YYYY-MM-DD`
    pub pickup_date: String,

    /// Item total before discounts
    pub subtotal: u64,

    /// Combined coupon + offer discount
    pub discount_amount: u64,

    /// Final payable amount
    pub total_amount: u64,

    /// Current lifecycle status
    pub status: String,

    /// Tracking number
    pub tracking_number: String,

    /// Creation time
    pub created_at: String,

    /// Line items with price snapshots
    pub items: Vec<OrderItemResponse>,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            uuid: order.uuid.into(),
            pickup_date: order.pickup_date.to_string(),
            status: order.status.as_str().to_string(),
            created_at: order.created_at.to_string(),
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            whatsapp_number: order.whatsapp_number,
            subtotal: order.subtotal,
            discount_amount: order.discount_amount,
            total_amount: order.total_amount,
            tracking_number: order.tracking_number,
            items: order.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Get Order Handler
///
/// Returns an order with its line items, for the confirmation page.
#[endpoint(tags("orders"), summary = "Get Order")]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .get_order(order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
