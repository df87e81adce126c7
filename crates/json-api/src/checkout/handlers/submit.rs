//! Checkout Submit Handler

use std::sync::Arc;

use jiff::civil::Date;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crumb_app::domain::checkout::{CheckoutService as _, data::CheckoutRequest};

use crate::{checkout::errors::into_status_error, extensions::*, state::State};

/// Checkout Submit Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubmitCheckoutRequest {
    /// Customer name
    pub name: String,

    /// Customer email, used for notifications and order history
    pub email: String,

    /// E.164 number for WhatsApp updates
    #[serde(default)]
    pub whatsapp_number: Option<String>,

    /// Pickup date, `YYYY-MM-DD`
    pub pickup_date: String,

    /// Coupon code; overrides any code stashed on the session
    #[serde(default)]
    pub coupon_code: Option<String>,
}

/// Order Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderCreatedResponse {
    /// Created order UUID, for the confirmation page redirect
    pub uuid: Uuid,

    /// Final payable amount in minor currency units
    pub total_amount: u64,

    /// Tracking number assigned to the order
    pub tracking_number: String,
}

/// Checkout Submit Handler
///
/// Validates the checkout form and turns the session's cart into a
/// pending order.
#[endpoint(
    tags("checkout"),
    summary = "Submit Checkout",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::CONFLICT, description = "Cart is empty"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid coupon or pickup date"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SubmitCheckoutRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = req.session_uuid_or_400()?;
    let request = json.into_inner();

    let pickup_date = request.pickup_date.parse::<Date>().map_err(|_error| {
        StatusError::unprocessable_entity().brief("pickup_date must be YYYY-MM-DD")
    })?;

    let order = state
        .app
        .checkout
        .submit(
            session,
            CheckoutRequest {
                customer_name: request.name,
                customer_email: request.email,
                whatsapp_number: request.whatsapp_number,
                pickup_date,
                coupon_code: request.coupon_code,
            },
            jiff::Timestamp::now(),
        )
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(OrderCreatedResponse {
        uuid: order.uuid.into(),
        total_amount: order.total_amount,
        tracking_number: order.tracking_number,
    }))
}
