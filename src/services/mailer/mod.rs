pub mod log;
pub mod relay;

use async_trait::async_trait;

use crate::models::MailMessage;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &MailMessage) -> anyhow::Result<()>;
}
