//! Bulk Order Transition Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crumb_app::domain::orders::{OrdersService as _, status::OrderStatus};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Bulk Order Transition Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TransitionOrdersRequest {
    /// Target status, e.g. `"confirmed"`
    pub status: String,

    /// Orders to transition
    pub orders: Vec<Uuid>,
}

/// Bulk Order Transition Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TransitionOrdersResponse {
    /// How many orders were actually updated; the rest were skipped by the
    /// lifecycle rules
    pub updated: u32,
}

/// Bulk Order Transition Handler
///
/// Moves every given order to the target status, notifying each customer,
/// and reports the number updated.
#[endpoint(
    tags("orders"),
    summary = "Transition Orders",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(
    json: JsonBody<TransitionOrdersRequest>,
    depot: &mut Depot,
) -> Result<Json<TransitionOrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let status = request
        .status
        .parse::<OrderStatus>()
        .or_400("unknown order status")?;

    let updated = state
        .app
        .orders
        .transition_orders(
            request.orders.into_iter().map(Into::into).collect(),
            status,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(TransitionOrdersResponse { updated }))
}
