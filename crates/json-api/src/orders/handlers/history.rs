//! Order History Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crumb_app::domain::orders::OrdersService as _;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderResponse},
    state::State,
};

/// Order History Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderHistoryResponse {
    /// Past orders, newest first, without line items
    pub orders: Vec<OrderResponse>,
}

/// Order History Handler
///
/// Returns a customer's past orders, newest first.
#[endpoint(tags("orders"), summary = "Order History")]
pub(crate) async fn handler(
    email: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<OrderHistoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let orders = state
        .app
        .orders
        .list_orders_by_email(email.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrderHistoryResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}
