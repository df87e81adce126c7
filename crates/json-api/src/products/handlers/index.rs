//! Product Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crumb_app::domain::products::ProductsService as _;

use crate::{extensions::*, products::get::ProductResponse, state::State};

/// Products Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products, sorted by category name then product name
    pub products: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns the catalog, optionally filtered to one category.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    category: QueryParam<Uuid, false>,
    at: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let point_in_time = at.into_point_in_time()?;

    let products = state
        .app
        .products
        .list_products(category.into_inner().map(Into::into), point_in_time)
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crumb_app::domain::{categories::records::CategoryUuid, products::records::ProductUuid};

    use crate::test_helpers::{MockApp, make_product, service_with};

    use super::*;

    fn make_service(app: MockApp) -> Service {
        service_with(Router::with_path("products").get(handler), app)
    }

    #[tokio::test]
    async fn test_index_returns_products() -> TestResult {
        let uuid_a = ProductUuid::new();
        let uuid_b = ProductUuid::new();

        let mut app = MockApp::new();

        app.products
            .expect_list_products()
            .once()
            .withf(|category, _| category.is_none())
            .return_once(move |_, _| Ok(vec![make_product(uuid_a), make_product(uuid_b)]));

        let response: ProductsResponse = TestClient::get("http://example.com/products")
            .send(&make_service(app))
            .await
            .take_json()
            .await?;

        assert_eq!(response.products.len(), 2, "expected two products");
        assert_eq!(response.products[0].uuid, uuid_a.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_category_filter() -> TestResult {
        let category = CategoryUuid::new();

        let mut app = MockApp::new();

        app.products
            .expect_list_products()
            .once()
            .withf(move |filter, _| *filter == Some(category))
            .return_once(|_, _| Ok(vec![]));

        let res = TestClient::get(format!("http://example.com/products?category={category}"))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
