//! Offer Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crumb_app::domain::offers::{OffersService as _, records::SpecialOfferRecord};

use crate::{extensions::*, state::State};

/// Special Offer Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OfferResponse {
    /// The unique identifier of the offer
    pub uuid: Uuid,

    /// Display title
    pub title: String,

    /// Percentage discount; takes precedence over the fixed amount when
    /// positive
    pub discount_percentage: String,

    /// Fixed discount in minor currency units
    pub discount_amount: u64,

    /// Minimum order subtotal for the offer to apply
    pub minimum_order_value: u64,

    /// Whether the offer is switched on
    pub active: bool,

    /// Validity window start
    pub valid_from: String,

    /// Validity window end
    pub valid_until: String,
}

impl From<SpecialOfferRecord> for OfferResponse {
    fn from(offer: SpecialOfferRecord) -> Self {
        OfferResponse {
            uuid: offer.uuid.into(),
            title: offer.title,
            discount_percentage: offer.discount_percentage.to_string(),
            discount_amount: offer.discount_amount,
            minimum_order_value: offer.minimum_order_value,
            active: offer.active,
            valid_from: offer.valid_from.to_string(),
            valid_until: offer.valid_until.to_string(),
        }
    }
}

/// Offers Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OffersResponse {
    /// Every offer on record, including inactive ones
    pub offers: Vec<OfferResponse>,
}

/// Offer Index Handler
///
/// Returns every offer on record.
#[endpoint(
    tags("offers"),
    summary = "List Offers",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OffersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let offers = state
        .app
        .offers
        .list_offers()
        .await
        .or_500("failed to fetch offers")?;

    Ok(Json(OffersResponse {
        offers: offers.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crumb_app::domain::offers::records::OfferUuid;

    use crate::test_helpers::{MockApp, make_offer, service_with};

    use super::*;

    #[tokio::test]
    async fn test_index_returns_offers() -> TestResult {
        let uuid = OfferUuid::new();

        let mut app = MockApp::new();

        app.offers
            .expect_list_offers()
            .once()
            .return_once(move || Ok(vec![make_offer(uuid)]));

        let response: OffersResponse = TestClient::get("http://example.com/offers")
            .send(&service_with(Router::with_path("offers").get(handler), app))
            .await
            .take_json()
            .await?;

        assert_eq!(response.offers.len(), 1);
        assert_eq!(response.offers[0].uuid, uuid.into_uuid());

        Ok(())
    }
}
