//! Session extraction helpers.

use salvo::{Request, prelude::StatusError};
use uuid::Uuid;

use crumb_app::domain::carts::records::SessionUuid;

/// Header carrying the client-generated session UUID for cart state.
pub(crate) const SESSION_HEADER: &str = "x-session-id";

pub(crate) trait SessionExt {
    fn session_uuid_or_400(&self) -> Result<SessionUuid, StatusError>;
}

impl SessionExt for Request {
    fn session_uuid_or_400(&self) -> Result<SessionUuid, StatusError> {
        let value = self
            .headers()
            .get(SESSION_HEADER)
            .ok_or_else(|| StatusError::bad_request().brief("Missing X-Session-Id header"))?;

        let uuid = value
            .to_str()
            .ok()
            .and_then(|value| value.parse::<Uuid>().ok())
            .ok_or_else(|| StatusError::bad_request().brief("Invalid X-Session-Id header"))?;

        Ok(SessionUuid::from_uuid(uuid))
    }
}
