//! Delete Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crumb_app::domain::categories::CategoriesService as _;

use crate::{categories::errors::into_status_error, extensions::*, state::State};

/// Delete Category Handler
///
/// Products referencing the category are detached, never deleted.
#[endpoint(
    tags("categories"),
    summary = "Delete Category",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(
    category: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .categories
        .delete_category(category.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use crumb_app::domain::categories::{CategoriesServiceError, records::CategoryUuid};

    use crate::test_helpers::{MockApp, service_with};

    use super::*;

    #[tokio::test]
    async fn test_delete_missing_category_returns_404() -> TestResult {
        let uuid = CategoryUuid::new();

        let mut app = MockApp::new();

        app.categories
            .expect_delete_category()
            .once()
            .return_once(|_| Err(CategoriesServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/categories/{uuid}"))
            .send(&service_with(
                Router::with_path("categories/{category}").delete(handler),
                app,
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
