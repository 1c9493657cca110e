use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use rakshan_contact::{
    Command, EmailDispatcher, Recipient, SmsNotifier, SubmissionPayload, SubmitFormInput,
};
use tokio::sync::Notify;

#[derive(Clone, Default)]
pub struct Recorder {
    pub calls: Arc<AtomicUsize>,
    pub payloads: Arc<Mutex<Vec<SubmissionPayload>>>,
    pub fail: Arc<Mutex<bool>>,
    pub gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl Recorder {
    pub fn failing() -> Self {
        let recorder = Self::default();
        recorder.set_fail(true);
        recorder
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Default::default()
        }
    }

    pub fn set_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_payload(&self) -> Option<SubmissionPayload> {
        self.payloads.lock().unwrap().last().cloned()
    }

    async fn record(&self, payload: &SubmissionPayload, what: &str) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().unwrap().push(payload.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if *self.fail.lock().unwrap() {
            anyhow::bail!("{what} unavailable");
        }

        Ok(())
    }
}

pub struct FakeEmail(pub Recorder);

#[async_trait]
impl EmailDispatcher for FakeEmail {
    async fn send(&self, payload: &SubmissionPayload) -> anyhow::Result<()> {
        self.0.record(payload, "email service").await
    }
}

pub struct FakeSms(pub Recorder);

#[async_trait]
impl SmsNotifier for FakeSms {
    async fn notify(&self, payload: &SubmissionPayload) -> anyhow::Result<()> {
        self.0.record(payload, "sms endpoint").await
    }
}

pub fn recipient() -> Recipient {
    Recipient {
        email: "rakshankitchenlimited@gmail.com".to_owned(),
        phone: "+91 9310123565".to_owned(),
    }
}

pub fn command(email: &Recorder, sms: &Recorder) -> Command {
    Command::new(FakeEmail(email.clone()), FakeSms(sms.clone()), recipient())
}

pub fn valid_input() -> SubmitFormInput {
    SubmitFormInput {
        name: "Asha Verma".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: "9310123565".to_owned(),
        service: "renovation".to_owned(),
        message: "Please call me back".to_owned(),
        submission_id: "3f0a3a3e-2f6c-4b53-9a4e-1d2b3c4d5e6f".to_owned(),
    }
}
