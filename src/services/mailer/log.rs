use async_trait::async_trait;

use super::Mailer;
use crate::models::MailMessage;

/// Writes outgoing mail to the log instead of delivering it. Used when no relay is configured.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &MailMessage) -> anyhow::Result<()> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            "mail relay not configured, logging message instead"
        );
        tracing::debug!(body = %message.text, "unsent mail body");
        Ok(())
    }
}
