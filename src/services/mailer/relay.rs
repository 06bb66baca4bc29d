use anyhow::Context;
use async_trait::async_trait;

use super::Mailer;
use crate::models::MailMessage;

/// Hands mail to a hosted HTTP relay as a JSON document.
pub struct HttpMailRelay {
    url: String,
    api_key: String,
    client: reqwest::Client,
}

impl HttpMailRelay {
    pub fn new(url: String, api_key: String) -> Self {
        Self {
            url,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Mailer for HttpMailRelay {
    async fn send(&self, message: &MailMessage) -> anyhow::Result<()> {
        let mut request = self.client.post(&self.url).json(message);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        request
            .send()
            .await
            .context("failed to reach mail relay")?
            .error_for_status()
            .context("mail relay returned error")?;

        Ok(())
    }
}
