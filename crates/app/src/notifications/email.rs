//! SMTP email channel.

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor, message::Mailbox,
    transport::smtp::authentication::Credentials,
};
use thiserror::Error;

/// SMTP relay settings for the email channel.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP relay hostname, e.g. `"smtp.example.com"`.
    pub smtp_host: String,

    pub smtp_username: String,

    pub smtp_password: String,

    /// Sender address for all outgoing mail.
    pub from_address: String,
}

/// Thin wrapper over an async SMTP transport.
#[derive(Clone)]
pub(crate) struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl Mailer {
    pub(crate) fn new(config: &EmailConfig) -> Result<Self, EmailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        let from = config.from_address.parse::<Mailbox>()?;

        Ok(Self { transport, from })
    }

    pub(crate) async fn send(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), EmailError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse::<Mailbox>()?)
            .subject(subject)
            .body(body.to_string())?;

        self.transport.send(message).await?;

        Ok(())
    }
}

/// Errors from building or sending an email.
#[derive(Debug, Error)]
pub(crate) enum EmailError {
    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
