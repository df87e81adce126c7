//! Admin auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};

use crate::state::State;

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid Authorization header"));

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    if token != state.admin_token {
        res.render(StatusError::unauthorized().brief("Invalid admin token"));

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use crate::test_helpers::{MockApp, TEST_ADMIN_TOKEN, service_with_hoop};

    use super::*;

    #[salvo::handler]
    async fn probe(res: &mut Response) {
        res.render("ok");
    }

    fn make_service() -> Service {
        service_with_hoop(handler, Router::with_path("probe").get(probe), MockApp::new())
    }

    #[tokio::test]
    async fn test_missing_authorization_header_returns_401() -> TestResult {
        let res = TestClient::get("http://example.com/probe")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_non_bearer_authorization_header_returns_401() -> TestResult {
        let res = TestClient::get("http://example.com/probe")
            .add_header(AUTHORIZATION, "Basic abc123", true)
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_wrong_token_returns_401() -> TestResult {
        let res = TestClient::get("http://example.com/probe")
            .add_header(AUTHORIZATION, "Bearer not-the-token", true)
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_valid_token_passes_through() -> TestResult {
        let res = TestClient::get("http://example.com/probe")
            .add_header(AUTHORIZATION, format!("Bearer {TEST_ADMIN_TOKEN}"), true)
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
