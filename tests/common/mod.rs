#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, header},
};
use rakshan::{
    AppState,
    config::{BusinessConfig, Config, HttpConfig, ObservabilityConfig, ServerConfig},
};
use rakshan_contact::{Command, EmailDispatcher, SmsNotifier, SubmissionPayload};
use rakshan_notification::{EMAILJS_API_URL, EmailJsConfig, SmsConfig};

/// Stands in for EmailJS or the SMS endpoint, recording every payload.
#[derive(Clone, Default)]
pub struct Upstream {
    calls: Arc<AtomicUsize>,
    payloads: Arc<Mutex<Vec<SubmissionPayload>>>,
    fail: Arc<Mutex<bool>>,
}

impl Upstream {
    pub fn failing() -> Self {
        let upstream = Self::default();
        upstream.set_fail(true);
        upstream
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

    fn record(&self, payload: &SubmissionPayload) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().unwrap().push(payload.clone());

        if *self.fail.lock().unwrap() {
            anyhow::bail!("upstream unavailable");
        }

        Ok(())
    }
}

struct FakeEmail(Upstream);

#[async_trait]
impl EmailDispatcher for FakeEmail {
    async fn send(&self, payload: &SubmissionPayload) -> anyhow::Result<()> {
        self.0.record(payload)
    }
}

struct FakeSms(Upstream);

#[async_trait]
impl SmsNotifier for FakeSms {
    async fn notify(&self, payload: &SubmissionPayload) -> anyhow::Result<()> {
        self.0.record(payload)
    }
}

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        emailjs: EmailJsConfig {
            public_key: "public-key".to_string(),
            private_key: None,
            service_id: "service_rakshan".to_string(),
            template_id: "template_contact".to_string(),
            api_url: EMAILJS_API_URL.to_string(),
        },
        sms: SmsConfig {
            endpoint: "http://localhost:3001/api/contact".to_string(),
        },
        business: BusinessConfig::default(),
        http: HttpConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub email: Upstream,
    pub sms: Upstream,
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(Upstream::default(), Upstream::default())
}

pub fn create_test_app_with(email: Upstream, sms: Upstream) -> TestApp {
    let config = config();
    let contact_command = Command::new(
        FakeEmail(email.clone()),
        FakeSms(sms.clone()),
        config.business.recipient(),
    );

    let router = rakshan::router(AppState {
        config,
        contact_command,
    });

    TestApp { router, email, sms }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap()
}

pub fn valid_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Asha Verma"),
        ("email", "asha@example.com"),
        ("phone", "9310123565"),
        ("service", "renovation"),
        ("message", "Please call me back"),
        ("submission_id", "7c9e6679-7425-40de-944b-e07fc1f90ae7"),
    ]
}
