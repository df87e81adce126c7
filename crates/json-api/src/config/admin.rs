//! Admin Config

use clap::Args;

/// Admin API access settings.
#[derive(Debug, Args)]
pub struct AdminConfig {
    /// Bearer token required on `/admin` routes
    #[arg(long, env = "ADMIN_TOKEN")]
    pub admin_token: String,
}
