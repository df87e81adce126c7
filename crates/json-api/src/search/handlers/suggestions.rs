//! Search Suggestions Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crumb_app::domain::products::ProductsService as _;

use crate::{extensions::*, products::get::ProductResponse, state::State};

/// Suggestions Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SuggestionsResponse {
    /// Suggested products; substring matches first, then fuzzy
    /// near-misses ranked by similarity
    pub suggestions: Vec<ProductResponse>,
}

/// Search Suggestions Handler
///
/// Suggestions for a partial query. Falls back to fuzzy name matching
/// when nothing matches by substring, so typos still surface results.
#[endpoint(tags("search"), summary = "Search Suggestions")]
pub(crate) async fn handler(
    q: QueryParam<String, true>,
    at: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<SuggestionsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let point_in_time = at.into_point_in_time()?;

    let suggestions = state
        .app
        .products
        .suggest_products(q.into_inner(), point_in_time)
        .await
        .or_500("failed to fetch suggestions")?;

    Ok(Json(SuggestionsResponse {
        suggestions: suggestions.into_iter().map(Into::into).collect(),
    }))
}
