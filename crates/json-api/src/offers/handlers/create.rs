//! Create Offer Handler

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crumb_app::domain::offers::{OffersService as _, data::NewOffer};

use crate::{extensions::*, offers::errors::into_status_error, state::State};

fn default_active() -> bool {
    true
}

/// Create Offer Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOfferRequest {
    pub uuid: Uuid,
    pub title: String,
    /// Percentage discount, e.g. `"12.5"`; wins over the fixed amount when
    /// positive
    #[serde(default)]
    pub discount_percentage: Option<String>,
    /// Fixed discount in minor currency units
    #[serde(default)]
    pub discount_amount: u64,
    #[serde(default)]
    pub minimum_order_value: u64,
    #[serde(default = "default_active")]
    pub active: bool,
    /// Validity window start, RFC 3339
    pub valid_from: String,
    /// Validity window end, RFC 3339
    pub valid_until: String,
}

/// Offer Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OfferCreatedResponse {
    /// Created offer UUID
    pub uuid: Uuid,
}

/// Create Offer Handler
#[endpoint(
    tags("offers"),
    summary = "Create Offer",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOfferRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OfferCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let discount_percentage = request
        .discount_percentage
        .as_deref()
        .map(str::parse::<Decimal>)
        .transpose()
        .or_400("could not parse discount_percentage")?
        .unwrap_or(Decimal::ZERO);

    let valid_from = request
        .valid_from
        .parse::<Timestamp>()
        .or_400("could not parse valid_from")?;

    let valid_until = request
        .valid_until
        .parse::<Timestamp>()
        .or_400("could not parse valid_until")?;

    let uuid = state
        .app
        .offers
        .create_offer(NewOffer {
            uuid: request.uuid.into(),
            title: request.title,
            discount_percentage,
            discount_amount: request.discount_amount,
            minimum_order_value: request.minimum_order_value,
            active: request.active,
            valid_from,
            valid_until,
        })
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/admin/offers/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(OfferCreatedResponse { uuid: uuid.into() }))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use serde_json::json;
    use testresult::TestResult;

    use crumb_app::domain::offers::records::OfferUuid;

    use crate::test_helpers::{MockApp, make_offer, service_with};

    use super::*;

    fn make_service(app: MockApp) -> Service {
        service_with(Router::with_path("offers").post(handler), app)
    }

    #[tokio::test]
    async fn test_create_offer_parses_percentage_and_window() -> TestResult {
        let uuid = OfferUuid::new();

        let mut app = MockApp::new();

        app.offers
            .expect_create_offer()
            .once()
            .withf(move |new| {
                new.uuid == uuid
                    && new.discount_percentage == Decimal::new(125, 1)
                    && new.minimum_order_value == 1000_00
            })
            .return_once(move |_| Ok(make_offer(uuid)));

        let res = TestClient::post("http://example.com/offers")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "title": "Festive Special",
                "discount_percentage": "12.5",
                "minimum_order_value": 1000_00,
                "valid_from": "2026-01-01T00:00:00Z",
                "valid_until": "2026-12-31T23:59:59Z",
            }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_offer_rejects_bad_window() -> TestResult {
        let uuid = OfferUuid::new();

        let app = MockApp::new();

        let res = TestClient::post("http://example.com/offers")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "title": "Festive Special",
                "valid_from": "not-a-date",
                "valid_until": "2026-12-31T23:59:59Z",
            }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
