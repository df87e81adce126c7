//! Checkout Config

use clap::Args;

use crumb_app::domain::checkout::pricing::DeliveryPolicy;

/// Checkout pricing settings.
#[derive(Debug, Args)]
pub struct CheckoutConfig {
    /// Flat delivery surcharge in minor currency units; zero disables it
    #[arg(long, env = "DELIVERY_CHARGE", default_value_t = 0)]
    pub delivery_charge: u64,

    /// Subtotal (minor units) at which delivery becomes free
    #[arg(long, env = "FREE_DELIVERY_THRESHOLD")]
    pub free_delivery_threshold: Option<u64>,
}

impl CheckoutConfig {
    #[must_use]
    pub fn delivery_policy(&self) -> DeliveryPolicy {
        DeliveryPolicy {
            charge: self.delivery_charge,
            free_delivery_threshold: self.free_delivery_threshold,
        }
    }
}
