//! Notification dispatcher.

use mockall::automock;
use tracing::warn;

use crate::{
    domain::orders::records::OrderRecord,
    notifications::{
        email::{EmailConfig, Mailer},
        messages,
        whatsapp::{WhatsAppClient, WhatsAppConfig},
    },
};

/// Dispatcher settings. Any channel or recipient left unset is silently
/// skipped.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Store display name used in customer-facing messages.
    pub store_name: String,

    /// Where new-order notifications are mailed.
    pub admin_email: Option<String>,

    /// E.164 number for new-order WhatsApp notifications.
    pub admin_whatsapp: Option<String>,

    pub email: Option<EmailConfig>,

    pub whatsapp: Option<WhatsAppConfig>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            store_name: "Rose Cakes".to_string(),
            admin_email: None,
            admin_whatsapp: None,
            email: None,
            whatsapp: None,
        }
    }
}

/// Order notification sink.
///
/// Implementations are fire-and-forget: callers never learn whether
/// delivery succeeded, and must not be blocked by it.
#[automock]
pub trait Notifier: Send + Sync {
    /// Tell the store admin a new order was placed.
    fn notify_admin_new_order(&self, order: &OrderRecord);

    /// Tell the customer their order status changed.
    fn notify_customer_status_changed(&self, order: &OrderRecord);
}

/// Production dispatcher: formats per-status message bodies and sends them
/// over the configured channels on detached tasks.
pub struct Dispatcher {
    store_name: String,
    admin_email: Option<String>,
    admin_whatsapp: Option<String>,
    mailer: Option<Mailer>,
    whatsapp: Option<WhatsAppClient>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(config: DispatcherConfig) -> Self {
        let mailer = config.email.as_ref().and_then(|email| {
            Mailer::new(email)
                .inspect_err(|error| warn!("email channel disabled: {error}"))
                .ok()
        });

        let whatsapp = config.whatsapp.map(WhatsAppClient::new);

        Self {
            store_name: config.store_name,
            admin_email: config.admin_email,
            admin_whatsapp: config.admin_whatsapp,
            mailer,
            whatsapp,
        }
    }

    /// A dispatcher with every channel disabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(DispatcherConfig::default())
    }

    /// Send `body` to whichever of the two recipients have a configured
    /// channel. Detached: failures are logged and discarded.
    fn dispatch(
        &self,
        email_to: Option<String>,
        whatsapp_to: Option<String>,
        subject: String,
        body: String,
    ) {
        if let (Some(mailer), Some(to)) = (self.mailer.clone(), email_to) {
            let subject = subject.clone();
            let body = body.clone();

            tokio::spawn(async move {
                if let Err(error) = mailer.send(&to, &subject, &body).await {
                    warn!("failed to send notification email to {to}: {error}");
                }
            });
        }

        if let (Some(client), Some(to)) = (self.whatsapp.clone(), whatsapp_to) {
            tokio::spawn(async move {
                if let Err(error) = client.send_text(&to, &body).await {
                    warn!("failed to send WhatsApp notification to {to}: {error}");
                }
            });
        }
    }
}

impl Notifier for Dispatcher {
    fn notify_admin_new_order(&self, order: &OrderRecord) {
        self.dispatch(
            self.admin_email.clone(),
            self.admin_whatsapp.clone(),
            messages::admin_new_order_subject(order),
            messages::admin_new_order_message(order),
        );
    }

    fn notify_customer_status_changed(&self, order: &OrderRecord) {
        self.dispatch(
            Some(order.customer_email.clone()),
            order.whatsapp_number.clone(),
            messages::customer_status_subject(order),
            messages::customer_status_message(order, &self.store_name),
        );
    }
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, civil::date};

    use crate::domain::orders::{records::OrderUuid, status::OrderStatus};

    use super::*;

    fn order() -> OrderRecord {
        OrderRecord {
            uuid: OrderUuid::new(),
            customer_name: "Asha".to_string(),
            customer_email: "asha@example.com".to_string(),
            whatsapp_number: None,
            pickup_date: date(2026, 3, 14),
            subtotal: 1000_00,
            discount_amount: 0,
            total_amount: 1000_00,
            status: OrderStatus::Pending,
            coupon_uuid: None,
            offer_uuid: None,
            tracking_number: "TRK-0000000000".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            items: Vec::new(),
        }
    }

    #[tokio::test]
    async fn disabled_dispatcher_swallows_everything() {
        let dispatcher = Dispatcher::disabled();

        // No channels configured: both calls must return without effect.
        dispatcher.notify_admin_new_order(&order());
        dispatcher.notify_customer_status_changed(&order());
    }
}
