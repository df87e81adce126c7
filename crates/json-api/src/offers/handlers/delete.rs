//! Delete Offer Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crumb_app::domain::offers::OffersService as _;

use crate::{extensions::*, offers::errors::into_status_error, state::State};

/// Delete Offer Handler
#[endpoint(
    tags("offers"),
    summary = "Delete Offer",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(
    offer: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .offers
        .delete_offer(offer.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use crumb_app::domain::offers::{OffersServiceError, records::OfferUuid};

    use crate::test_helpers::{MockApp, service_with};

    use super::*;

    #[tokio::test]
    async fn test_delete_missing_offer_returns_404() -> TestResult {
        let uuid = OfferUuid::new();

        let mut app = MockApp::new();

        app.offers
            .expect_delete_offer()
            .once()
            .return_once(|_| Err(OffersServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/offers/{uuid}"))
            .send(&service_with(
                Router::with_path("offers/{offer}").delete(handler),
                app,
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
