//! Webhook notifier (HTTP POST with a JSON payload).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use url::Url;

use super::{Notifier, NotifyError};

#[derive(Debug, Serialize)]
struct Payload<'a> {
    recipient: &'a str,
    subject: &'a str,
    body: &'a str,
}

pub struct WebhookNotifier {
    url: Url,
    bearer_token: Option<String>,
    client: Client,
}

impl WebhookNotifier {
    pub fn new(
        url: Url,
        bearer_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url,
            bearer_token,
            client,
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, recipient: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        let payload = Payload {
            recipient,
            subject,
            body,
        };

        let mut request = self.client.post(self.url.clone()).json(&payload);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(url = %self.url, subject = %subject, "Webhook notification delivered");
        Ok(())
    }
}
