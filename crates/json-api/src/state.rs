//! State

use std::sync::Arc;

use crumb_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Bearer token required on `/admin` routes.
    pub(crate) admin_token: String,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, admin_token: String) -> Arc<Self> {
        Arc::new(Self { app, admin_token })
    }
}
