//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crumb_app::domain::products::ProductsService as _;

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Cart Mutation Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartMutationResponse {
    /// Total units across all cart lines after the change
    pub total_quantity: u32,
}

/// Add Cart Item Handler
///
/// Adds `quantity` units (default 1) of a product to the session's cart.
#[endpoint(tags("cart"), summary = "Add Cart Item")]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    quantity: QueryParam<u32, false>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartMutationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = req.session_uuid_or_400()?;

    let quantity = quantity.into_inner().unwrap_or(1).max(1);

    // Unknown products never enter the cart.
    let product = state
        .app
        .products
        .get_product(product.into_inner().into(), jiff::Timestamp::now())
        .await
        .map_err(into_status_error)?;

    let cart = state
        .app
        .carts
        .add_item(session, product.uuid, quantity)
        .await;

    Ok(Json(CartMutationResponse {
        total_quantity: cart.total_quantity(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crumb_app::domain::{
        carts::records::{CartLine, SessionCart, SessionUuid},
        products::{ProductsServiceError, records::ProductUuid},
    };

    use crate::{
        extensions::session::SESSION_HEADER,
        test_helpers::{MockApp, make_product, service_with},
    };

    use super::*;

    fn make_service(app: MockApp) -> Service {
        service_with(
            Router::with_path("cart/items/{product}").post(handler),
            app,
        )
    }

    #[tokio::test]
    async fn test_add_item_returns_new_quantity() -> TestResult {
        let session = SessionUuid::new();
        let product = ProductUuid::new();

        let mut app = MockApp::new();

        app.products
            .expect_get_product()
            .once()
            .withf(move |u, _| *u == product)
            .return_once(move |_, _| Ok(make_product(product)));

        app.carts
            .expect_add_item()
            .once()
            .withf(move |s, p, quantity| *s == session && *p == product && *quantity == 1)
            .return_once(move |_, p, quantity| SessionCart {
                lines: vec![CartLine {
                    product_uuid: p,
                    quantity,
                }],
                coupon_code: None,
            });

        let response: CartMutationResponse =
            TestClient::post(format!("http://example.com/cart/items/{product}"))
                .add_header(SESSION_HEADER, session.to_string(), true)
                .send(&make_service(app))
                .await
                .take_json()
                .await?;

        assert_eq!(response.total_quantity, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_unknown_product_returns_404() -> TestResult {
        let session = SessionUuid::new();
        let product = ProductUuid::new();

        let mut app = MockApp::new();

        app.products
            .expect_get_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::post(format!("http://example.com/cart/items/{product}"))
            .add_header(SESSION_HEADER, session.to_string(), true)
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
