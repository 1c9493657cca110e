//! Transactional email delivery through the EmailJS REST API

use std::time::Duration;

use async_trait::async_trait;
use rakshan_contact::{EmailDispatcher, SubmissionPayload};
use serde::{Deserialize, Serialize};

pub const EMAILJS_API_URL: &str = "https://api.emailjs.com";

#[derive(Debug, Deserialize, Clone)]
pub struct EmailJsConfig {
    #[serde(default)]
    pub public_key: String,
    #[serde(default)]
    pub private_key: Option<String>,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            private_key: None,
            service_id: String::new(),
            template_id: String::new(),
            api_url: default_api_url(),
        }
    }
}

fn default_api_url() -> String {
    EMAILJS_API_URL.to_owned()
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a SubmissionPayload,
}

/// EmailJS client, created once at startup with the account keys.
#[derive(Clone)]
pub struct EmailJsClient {
    http: reqwest::Client,
    endpoint: String,
    public_key: String,
    private_key: Option<String>,
    service_id: String,
    template_id: String,
}

impl EmailJsClient {
    pub fn new(config: &EmailJsConfig, timeout: Duration) -> anyhow::Result<Self> {
        if config.public_key.is_empty()
            || config.service_id.is_empty()
            || config.template_id.is_empty()
        {
            anyhow::bail!("EmailJS public key, service id and template id are required");
        }

        tracing::info!(
            api_url = %config.api_url,
            service_id = %config.service_id,
            template_id = %config.template_id,
            "EmailJS client initialized"
        );

        Ok(Self {
            http: crate::http_client(timeout)?,
            endpoint: format!(
                "{}/api/v1.0/email/send",
                config.api_url.trim_end_matches('/')
            ),
            public_key: config.public_key.to_owned(),
            private_key: config.private_key.clone().filter(|key| !key.is_empty()),
            service_id: config.service_id.to_owned(),
            template_id: config.template_id.to_owned(),
        })
    }
}

#[async_trait]
impl EmailDispatcher for EmailJsClient {
    async fn send(&self, payload: &SubmissionPayload) -> anyhow::Result<()> {
        tracing::info!(to = %payload.to_email, "Sending email");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&SendRequest {
                service_id: &self.service_id,
                template_id: &self.template_id,
                user_id: &self.public_key,
                access_token: self.private_key.as_deref(),
                template_params: payload,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("EmailJS responded with {status}: {body}");
        }

        Ok(())
    }
}
