//! Notification mail delivery via SMTP
//!
//! [`Mailer`] wraps the `lettre` async SMTP transport to send plain-text
//! deadline reminders. When `SMTP_HOST` is not configured the worker runs
//! without a mailer and the notification job logs and skips.

use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use watchdue_shared_config::SmtpConfig;

use crate::error::{WorkerError, WorkerResult};

/// A deadline reminder addressed to a single user for a single item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Item title
    pub name: String,
    /// Where to consume the item (platform or bookshop name), may be empty
    pub message: String,
    /// Link to the platform or bookshop, may be empty
    pub url: String,
    /// True when this is a start-date alert, false for a deadline alert
    pub is_start_date: bool,
    /// Recipient address
    pub recipient_email: String,
    /// Recipient display name
    pub recipient_name: String,
}

impl Notification {
    /// Subject line for this notification
    pub fn subject(&self) -> String {
        if self.is_start_date {
            format!("watchdue: \"{}\" is available today", self.name)
        } else {
            format!("watchdue: one day left for \"{}\"", self.name)
        }
    }

    /// Plain-text body for this notification
    pub fn body(&self, base_url: &str) -> String {
        let mut body = format!("Hi {},\n\n", self.recipient_name);

        if self.is_start_date {
            body.push_str(&format!("\"{}\" becomes available today.\n", self.name));
        } else {
            body.push_str(&format!(
                "Your deadline for \"{}\" is less than a day away.\n",
                self.name
            ));
        }

        if !self.message.is_empty() {
            body.push_str(&format!("Find it on {}", self.message));
            if !self.url.is_empty() {
                body.push_str(&format!(" ({})", self.url));
            }
            body.push('\n');
        }

        body.push_str(&format!("\nManage your list: {}\n", base_url));
        body
    }
}

/// Sends deadline reminder emails via SMTP
pub struct Mailer {
    config: SmtpConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl Mailer {
    /// Create a new mailer from SMTP configuration
    pub fn new(config: SmtpConfig) -> WorkerResult<Self> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port);

        if let (Some(user), Some(pass)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            config,
        })
    }

    /// Send a single deadline reminder
    ///
    /// # Errors
    /// Propagates address, build, and transport failures; the notification
    /// job logs these per message and continues with the next item.
    pub async fn send(&self, notification: &Notification) -> WorkerResult<()> {
        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(notification.recipient_email.parse()?)
            .subject(notification.subject())
            .header(ContentType::TEXT_PLAIN)
            .body(notification.body(&self.config.base_url))
            .map_err(|e| WorkerError::MailBuild(e.to_string()))?;

        self.transport.send(email).await?;

        tracing::info!(
            to = %notification.recipient_email,
            item = %notification.name,
            is_start_date = notification.is_start_date,
            "Notification email sent"
        );
        Ok(())
    }
}
