//! Apply Coupon Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crumb_app::domain::coupons::CouponsService as _;

use crate::{coupons::errors::into_status_error, extensions::*, state::State};

/// Apply Coupon Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApplyCouponRequest {
    /// Coupon code, case-insensitive
    pub code: String,
}

/// Coupon Applied Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CouponAppliedResponse {
    /// The normalised coupon code now stashed on the session
    pub code: String,

    /// Percentage discount the coupon grants
    pub discount_percentage: String,
}

/// Apply Coupon Handler
///
/// Validates a coupon code and stashes it on the session for checkout to
/// pick up. An unknown, expired, or exhausted code is rejected and leaves
/// the session unchanged.
#[endpoint(tags("cart"), summary = "Apply Coupon")]
pub(crate) async fn handler(
    json: JsonBody<ApplyCouponRequest>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CouponAppliedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = req.session_uuid_or_400()?;

    let coupon = state
        .app
        .coupons
        .validate_coupon(json.into_inner().code, jiff::Timestamp::now())
        .await
        .map_err(into_status_error)?;

    state
        .app
        .carts
        .set_coupon(session, Some(coupon.code.clone()))
        .await;

    Ok(Json(CouponAppliedResponse {
        code: coupon.code,
        discount_percentage: coupon.discount_percentage.to_string(),
    }))
}
