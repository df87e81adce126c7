//! Search Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crumb_app::domain::products::ProductsService as _;

use crate::{extensions::*, products::get::ProductResponse, state::State};

/// Search Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SearchResponse {
    /// The query that was searched for
    pub query: String,

    /// Matching products
    pub products: Vec<ProductResponse>,
}

/// Search Handler
///
/// Case-insensitive substring search on product name and description,
/// optionally restricted to one category.
#[endpoint(tags("search"), summary = "Search Products")]
pub(crate) async fn handler(
    q: QueryParam<String, false>,
    category: QueryParam<Uuid, false>,
    at: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<SearchResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let point_in_time = at.into_point_in_time()?;

    let query = q.into_inner().unwrap_or_default();
    let category = category.into_inner().map(Into::into);

    let products = if query.is_empty() {
        state
            .app
            .products
            .list_products(category, point_in_time)
            .await
    } else {
        state
            .app
            .products
            .search_products(query.clone(), category, point_in_time)
            .await
    }
    .or_500("failed to search products")?;

    Ok(Json(SearchResponse {
        query,
        products: products.into_iter().map(Into::into).collect(),
    }))
}
