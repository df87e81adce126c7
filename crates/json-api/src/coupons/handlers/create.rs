//! Create Coupon Handler

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crumb_app::domain::coupons::{CouponsService as _, data::NewCoupon};

use crate::{
    coupons::{errors::into_status_error, index::CouponResponse},
    extensions::*,
    state::State,
};

fn default_active() -> bool {
    true
}

fn default_usage_limit() -> u32 {
    100
}

/// Create Coupon Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCouponRequest {
    pub uuid: Uuid,
    /// Redemption code; stored uppercase
    pub code: String,
    /// Percentage discount, e.g. `"10"`
    pub discount_percentage: String,
    /// Validity window start, RFC 3339
    pub valid_from: String,
    /// Validity window end, RFC 3339
    pub valid_until: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default = "default_usage_limit")]
    pub usage_limit: u32,
}

/// Create Coupon Handler
#[endpoint(
    tags("coupons"),
    summary = "Create Coupon",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCouponRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CouponResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let discount_percentage = request
        .discount_percentage
        .parse::<Decimal>()
        .or_400("could not parse discount_percentage")?;

    let valid_from = request
        .valid_from
        .parse::<Timestamp>()
        .or_400("could not parse valid_from")?;

    let valid_until = request
        .valid_until
        .parse::<Timestamp>()
        .or_400("could not parse valid_until")?;

    let created = state
        .app
        .coupons
        .create_coupon(NewCoupon {
            uuid: request.uuid.into(),
            code: request.code,
            discount_percentage,
            valid_from,
            valid_until,
            active: request.active,
            usage_limit: request.usage_limit,
        })
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crumb_app::domain::coupons::{CouponsServiceError, records::CouponUuid};

    use crate::test_helpers::{MockApp, make_coupon, service_with};

    use super::*;

    fn make_service(app: MockApp) -> Service {
        service_with(Router::with_path("coupons").post(handler), app)
    }

    #[tokio::test]
    async fn test_create_coupon_returns_201() -> TestResult {
        let uuid = CouponUuid::new();

        let mut app = MockApp::new();

        app.coupons
            .expect_create_coupon()
            .once()
            .withf(move |new| new.code == "save10" && new.usage_limit == 5)
            .return_once(move |_| Ok(make_coupon(uuid, "SAVE10")));

        let mut res = TestClient::post("http://example.com/coupons")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "code": "save10",
                "discount_percentage": "10",
                "valid_from": "2026-01-01T00:00:00Z",
                "valid_until": "2026-12-31T23:59:59Z",
                "usage_limit": 5,
            }))
            .send(&make_service(app))
            .await;

        let body: CouponResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.code, "SAVE10", "code should come back uppercase");

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_code_returns_409() -> TestResult {
        let uuid = CouponUuid::new();

        let mut app = MockApp::new();

        app.coupons
            .expect_create_coupon()
            .once()
            .return_once(|_| Err(CouponsServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/coupons")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "code": "SAVE10",
                "discount_percentage": "10",
                "valid_from": "2026-01-01T00:00:00Z",
                "valid_until": "2026-12-31T23:59:59Z",
            }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
