//! Category Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crumb_app::domain::categories::{CategoriesService as _, records::CategoryRecord};

use crate::{extensions::*, state::State};

/// Category Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    /// The unique identifier of the category
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// Long description
    pub description: String,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        CategoryResponse {
            uuid: category.uuid.into(),
            name: category.name,
            description: category.description,
        }
    }
}

/// Categories Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoriesResponse {
    /// The list of categories, sorted by name
    pub categories: Vec<CategoryResponse>,
}

/// Category Index Handler
///
/// Returns all categories.
#[endpoint(tags("categories"), summary = "List Categories")]
pub(crate) async fn handler(
    at: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<CategoriesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let point_in_time = at.into_point_in_time()?;

    let categories = state
        .app
        .categories
        .list_categories(point_in_time)
        .await
        .or_500("failed to fetch categories")?;

    Ok(Json(CategoriesResponse {
        categories: categories.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crumb_app::domain::categories::records::CategoryUuid;

    use crate::test_helpers::{MockApp, service_with};

    use super::*;

    #[tokio::test]
    async fn test_index_returns_categories() -> TestResult {
        let uuid = CategoryUuid::new();

        let mut app = MockApp::new();

        app.categories.expect_list_categories().once().return_once(move |_| {
            Ok(vec![CategoryRecord {
                uuid,
                name: "Cheesecakes".to_string(),
                description: String::new(),
                created_at: Timestamp::UNIX_EPOCH,
                updated_at: Timestamp::UNIX_EPOCH,
                deleted_at: None,
            }])
        });

        let response: CategoriesResponse = TestClient::get("http://example.com/categories")
            .send(&service_with(
                Router::with_path("categories").get(handler),
                app,
            ))
            .await
            .take_json()
            .await?;

        assert_eq!(response.categories.len(), 1);
        assert_eq!(response.categories[0].name, "Cheesecakes");

        Ok(())
    }
}
