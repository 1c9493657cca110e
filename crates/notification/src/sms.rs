//! SMS notification through the contact forwarding endpoint

use std::time::Duration;

use async_trait::async_trait;
use rakshan_contact::{SmsNotifier, SubmissionPayload};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SmsConfig {
    #[serde(default)]
    pub endpoint: String,
}

#[derive(Clone)]
pub struct SmsEndpointClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SmsEndpointClient {
    pub fn new(config: &SmsConfig, timeout: Duration) -> anyhow::Result<Self> {
        if config.endpoint.is_empty() {
            anyhow::bail!("SMS endpoint is required");
        }

        Ok(Self {
            http: crate::http_client(timeout)?,
            endpoint: config.endpoint.to_owned(),
        })
    }
}

#[async_trait]
impl SmsNotifier for SmsEndpointClient {
    async fn notify(&self, payload: &SubmissionPayload) -> anyhow::Result<()> {
        tracing::info!(endpoint = %self.endpoint, to = %payload.to_phone, "Sending SMS notification");

        let response = self.http.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("failed to send SMS: endpoint responded with {status}");
        }

        Ok(())
    }
}
