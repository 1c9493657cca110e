use async_trait::async_trait;

use crate::SubmissionPayload;

/// Delivers a submission through the transactional-email service.
#[async_trait]
pub trait EmailDispatcher: Send + Sync {
    async fn send(&self, payload: &SubmissionPayload) -> anyhow::Result<()>;
}

/// Hands a submission to the endpoint that forwards it by SMS.
#[async_trait]
pub trait SmsNotifier: Send + Sync {
    async fn notify(&self, payload: &SubmissionPayload) -> anyhow::Result<()>;
}
