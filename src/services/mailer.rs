//! Outbound transactional email.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use crate::config::MailerConfig;

#[derive(Debug, thiserror::Error)]
#[error("email delivery failed: {0}")]
pub struct MailerError(pub String);

/// Delivery seam so handlers can be exercised without a provider.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// Send an HTML message to the configured recipients and return the
    /// provider's message id.
    async fn send_html(&self, subject: &str, html: &str) -> Result<String, MailerError>;
}

pub struct ResendMailer {
    client: Resend,
    from: String,
    to: Vec<String>,
}

impl ResendMailer {
    #[must_use]
    pub fn new(config: &MailerConfig) -> Self {
        Self { client: Resend::new(&config.resend_api_key), from: config.from.clone(), to: config.to.clone() }
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    async fn send_html(&self, subject: &str, html: &str) -> Result<String, MailerError> {
        let email = CreateEmailBaseOptions::new(&self.from, &self.to, subject).with_html(html);
        let response = self
            .client
            .emails
            .send(email)
            .await
            .map_err(|e| MailerError(e.to_string()))?;
        Ok(response.id.to_string())
    }
}
