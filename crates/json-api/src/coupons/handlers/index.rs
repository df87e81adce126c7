//! Coupon Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crumb_app::domain::coupons::{CouponsService as _, records::CouponRecord};

use crate::{extensions::*, state::State};

/// Coupon Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CouponResponse {
    /// The unique identifier of the coupon
    pub uuid: Uuid,

    /// Uppercase redemption code
    pub code: String,

    /// Percentage discount granted on the order subtotal
    pub discount_percentage: String,

    /// Whether the coupon is switched on
    pub active: bool,

    /// Global redemption cap
    pub usage_limit: u32,

    /// Redemptions so far
    pub used_count: u32,
}

impl From<CouponRecord> for CouponResponse {
    fn from(coupon: CouponRecord) -> Self {
        CouponResponse {
            uuid: coupon.uuid.into(),
            code: coupon.code,
            discount_percentage: coupon.discount_percentage.to_string(),
            active: coupon.active,
            usage_limit: coupon.usage_limit,
            used_count: coupon.used_count,
        }
    }
}

/// Coupons Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CouponsResponse {
    /// Every coupon on record
    pub coupons: Vec<CouponResponse>,
}

/// Coupon Index Handler
#[endpoint(
    tags("coupons"),
    summary = "List Coupons",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CouponsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let coupons = state
        .app
        .coupons
        .list_coupons()
        .await
        .or_500("failed to fetch coupons")?;

    Ok(Json(CouponsResponse {
        coupons: coupons.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crumb_app::domain::coupons::records::CouponUuid;

    use crate::test_helpers::{MockApp, make_coupon, service_with};

    use super::*;

    #[tokio::test]
    async fn test_index_returns_coupons() -> TestResult {
        let uuid = CouponUuid::new();

        let mut app = MockApp::new();

        app.coupons
            .expect_list_coupons()
            .once()
            .return_once(move || Ok(vec![make_coupon(uuid, "SAVE10")]));

        let response: CouponsResponse = TestClient::get("http://example.com/coupons")
            .send(&service_with(Router::with_path("coupons").get(handler), app))
            .await
            .take_json()
            .await?;

        assert_eq!(response.coupons.len(), 1);
        assert_eq!(response.coupons[0].code, "SAVE10");

        Ok(())
    }
}
