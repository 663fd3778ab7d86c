//! HTTP JSON health probe.
//!
//! # Responsibilities
//! - GET the target URL with a timeout
//! - Require HTTP 200 and a JSON body
//! - Compare the body's status field with the OK token

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::{HealthProbe, HealthResult};
use crate::config::ProbeConfig;

pub struct HttpProbe {
    client: Client,
    status_field: String,
    ok_status: String,
}

impl HttpProbe {
    pub fn new(config: &ProbeConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("api-monitor/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            status_field: config.status_field.clone(),
            ok_status: config.ok_status.clone(),
        })
    }

    /// Classify a decoded response body.
    fn classify(&self, json: &Value) -> HealthResult {
        match json.get(&self.status_field) {
            None => {
                tracing::warn!(
                    field = %self.status_field,
                    "Health response does not include the status field"
                );
                HealthResult::Indeterminate
            }
            Some(Value::String(s)) if *s == self.ok_status => HealthResult::Healthy,
            Some(other) => {
                tracing::debug!(status = %other, "Health response reports non-OK status");
                HealthResult::Unhealthy
            }
        }
    }
}

#[async_trait]
impl HealthProbe for HttpProbe {
    async fn observe(&self, target: &str) -> HealthResult {
        let response = match self.client.get(target).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(target = %target, error = %e, "Unable to request health endpoint");
                return HealthResult::Indeterminate;
            }
        };

        if response.status() != StatusCode::OK {
            tracing::warn!(
                target = %target,
                status = %response.status(),
                "Health check failed: non-200 status"
            );
            return HealthResult::Indeterminate;
        }

        let json: Value = match response.json().await {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(target = %target, error = %e, "Health response is not valid JSON");
                return HealthResult::Indeterminate;
            }
        };

        self.classify(&json)
    }
}
