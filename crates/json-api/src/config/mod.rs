//! Server configuration module

use clap::Parser;

use crate::config::{
    admin::AdminConfig, checkout::CheckoutConfig, db::DatabaseConfig, logging::LoggingConfig,
    notifications::NotificationsConfig, server::ServerRuntimeConfig,
};

pub(crate) mod admin;
pub(crate) mod checkout;
pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod notifications;
pub(crate) mod server;

/// Crumb JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "crumb-json", about = "Crumb storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Admin API access settings.
    #[command(flatten)]
    pub admin: AdminConfig,

    /// Notification channel settings.
    #[command(flatten)]
    pub notifications: NotificationsConfig,

    /// Checkout pricing settings.
    #[command(flatten)]
    pub checkout: CheckoutConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
