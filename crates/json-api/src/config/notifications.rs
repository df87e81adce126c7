//! Notifications Config

use clap::Args;

use crumb_app::notifications::{DispatcherConfig, EmailConfig, WhatsAppConfig};

/// Notification channel settings. A channel with incomplete credentials is
/// silently disabled.
#[derive(Debug, Args)]
pub struct NotificationsConfig {
    /// Store display name used in customer-facing messages
    #[arg(long, env = "STORE_NAME", default_value = "Rose Cakes")]
    pub store_name: String,

    /// Where new-order notifications are mailed
    #[arg(long, env = "ADMIN_EMAIL")]
    pub admin_email: Option<String>,

    /// E.164 number for new-order WhatsApp notifications
    #[arg(long, env = "ADMIN_WHATSAPP")]
    pub admin_whatsapp: Option<String>,

    /// SMTP relay hostname
    #[arg(long, env = "SMTP_HOST")]
    pub smtp_host: Option<String>,

    /// SMTP relay username
    #[arg(long, env = "SMTP_USERNAME")]
    pub smtp_username: Option<String>,

    /// SMTP relay password
    #[arg(long, env = "SMTP_PASSWORD")]
    pub smtp_password: Option<String>,

    /// Sender address for outgoing mail
    #[arg(long, env = "SMTP_FROM")]
    pub smtp_from: Option<String>,

    /// WhatsApp Cloud API access token
    #[arg(long, env = "WHATSAPP_TOKEN")]
    pub whatsapp_token: Option<String>,

    /// WhatsApp Cloud API sender phone number id
    #[arg(long, env = "WHATSAPP_PHONE_ID")]
    pub whatsapp_phone_id: Option<String>,
}

impl NotificationsConfig {
    /// Assemble the dispatcher configuration, enabling each channel only
    /// when its credentials are complete.
    #[must_use]
    pub fn dispatcher_config(&self) -> DispatcherConfig {
        let email = match (
            &self.smtp_host,
            &self.smtp_username,
            &self.smtp_password,
            &self.smtp_from,
        ) {
            (Some(smtp_host), Some(smtp_username), Some(smtp_password), Some(from_address)) => {
                Some(EmailConfig {
                    smtp_host: smtp_host.clone(),
                    smtp_username: smtp_username.clone(),
                    smtp_password: smtp_password.clone(),
                    from_address: from_address.clone(),
                })
            }
            _ => None,
        };

        let whatsapp = match (&self.whatsapp_token, &self.whatsapp_phone_id) {
            (Some(access_token), Some(phone_number_id)) => Some(WhatsAppConfig {
                access_token: access_token.clone(),
                phone_number_id: phone_number_id.clone(),
            }),
            _ => None,
        };

        DispatcherConfig {
            store_name: self.store_name.clone(),
            admin_email: self.admin_email.clone(),
            admin_whatsapp: self.admin_whatsapp.clone(),
            email,
            whatsapp,
        }
    }
}
