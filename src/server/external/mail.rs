//! Outgoing email through an HTTP mail relay.

use async_trait::async_trait;
use serde::Serialize;

use crate::server::{config::MailConfig, error::mail::MailError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &Email) -> Result<(), MailError>;
}

/// Posts each message as JSON to `MAIL_API_URL`, authenticated with
/// `MAIL_API_KEY` as a bearer token when configured.
pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpMailer {
    pub fn new(client: reqwest::Client, config: &MailConfig) -> Self {
        Self {
            client,
            endpoint: config.api_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        let mut request = self.client.post(&self.endpoint).json(email);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(MailError::Rejected {
                recipient: email.to.clone(),
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}
