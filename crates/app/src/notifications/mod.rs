//! Order notifications.
//!
//! Everything here is best-effort: a failed or unconfigured channel must
//! never fail the business transaction that triggered it.

mod dispatcher;
mod email;
mod messages;
mod whatsapp;

pub use dispatcher::{Dispatcher, DispatcherConfig, MockNotifier, Notifier};
pub use email::EmailConfig;
pub use whatsapp::WhatsAppConfig;
