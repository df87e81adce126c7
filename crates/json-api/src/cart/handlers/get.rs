//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crumb_app::domain::products::{ProductsService as _, ProductsServiceError};

use crate::{extensions::*, state::State};

/// One priced line of the cart
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
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

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Priced cart lines
    pub lines: Vec<CartLineResponse>,

    /// Total units across all lines
    pub total_quantity: u32,

    /// Sum of line subtotals in minor currency units
    pub subtotal: u64,

    /// Coupon code stashed for checkout, if any
    pub coupon_code: Option<String>,
}

/// Get Cart Handler
///
/// Returns the session's cart priced against the current catalog. Lines
/// whose product has left the catalog are dropped from the response.
#[endpoint(tags("cart"), summary = "Get Cart")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = req.session_uuid_or_400()?;

    let cart = state.app.carts.get_cart(session).await;

    let mut lines = Vec::with_capacity(cart.lines.len());
    let mut subtotal = 0;
    let mut total_quantity = 0;

    for line in &cart.lines {
        let product = match state
            .app
            .products
            .get_product(line.product_uuid, jiff::Timestamp::now())
            .await
        {
            Ok(product) => product,
            Err(ProductsServiceError::NotFound) => continue,
            Err(error) => return Err(crate::products::errors::into_status_error(error)),
        };

        let line_subtotal = product.price * u64::from(line.quantity);

        subtotal += line_subtotal;
        total_quantity += line.quantity;

        lines.push(CartLineResponse {
            product_uuid: product.uuid.into(),
            name: product.name,
            unit_price: product.price,
            quantity: line.quantity,
            line_subtotal,
        });
    }

    Ok(Json(CartResponse {
        lines,
        total_quantity,
        subtotal,
        coupon_code: cart.coupon_code,
    }))
}
