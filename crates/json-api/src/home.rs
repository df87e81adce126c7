//! Homepage Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crumb_app::domain::{offers::OffersService as _, products::ProductsService as _};

use crate::{
    extensions::*, offers::index::OfferResponse, products::get::ProductResponse, state::State,
};

/// Homepage Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HomeResponse {
    /// Products flagged as featured
    pub featured: Vec<ProductResponse>,

    /// Offers currently running
    pub offers: Vec<OfferResponse>,
}

/// Homepage Handler
///
/// Returns featured products and the currently-active offers.
#[endpoint(tags("home"), summary = "Homepage")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HomeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let now = Timestamp::now();

    let featured = state
        .app
        .products
        .list_featured(now)
        .await
        .or_500("failed to fetch featured products")?;

    let offers = state
        .app
        .offers
        .list_active_offers(now)
        .await
        .or_500("failed to fetch active offers")?;

    Ok(Json(HomeResponse {
        featured: featured.into_iter().map(Into::into).collect(),
        offers: offers.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crumb_app::domain::{offers::records::OfferUuid, products::records::ProductUuid};

    use crate::test_helpers::{MockApp, make_offer, make_product, service_with};

    use super::*;

    #[tokio::test]
    async fn test_home_returns_featured_and_offers() -> TestResult {
        let product = ProductUuid::new();
        let offer = OfferUuid::new();

        let mut app = MockApp::new();

        app.products
            .expect_list_featured()
            .once()
            .return_once(move |_| Ok(vec![make_product(product)]));

        app.offers
            .expect_list_active_offers()
            .once()
            .return_once(move |_| Ok(vec![make_offer(offer)]));

        let response: HomeResponse = TestClient::get("http://example.com/home")
            .send(&service_with(Router::with_path("home").get(handler), app))
            .await
            .take_json()
            .await?;

        assert_eq!(response.featured.len(), 1);
        assert_eq!(response.offers.len(), 1);
        assert_eq!(response.offers[0].uuid, offer.into_uuid());

        Ok(())
    }
}
