use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU16, Ordering},
};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use rakshan_contact::{Recipient, SubmissionPayload, SubmitFormInput};
use serde_json::Value;

/// Local stand-in for a remote HTTP collaborator.
#[derive(Clone)]
pub struct Upstream {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Value>>>,
    status: Arc<AtomicU16>,
}

#[allow(dead_code)]
impl Upstream {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    pub fn respond_with(&self, status: StatusCode) {
        self.status.store(status.as_u16(), Ordering::SeqCst);
    }
}

async fn record(State(upstream): State<Upstream>, Json(body): Json<Value>) -> (StatusCode, String) {
    upstream.requests.lock().unwrap().push(body);
    let status = StatusCode::from_u16(upstream.status.load(Ordering::SeqCst))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (status, status.canonical_reason().unwrap_or("").to_owned())
}

pub async fn spawn_upstream(path: &str) -> anyhow::Result<Upstream> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let upstream = Upstream {
        base_url: format!("http://{}", listener.local_addr()?),
        requests: Default::default(),
        status: Arc::new(AtomicU16::new(StatusCode::OK.as_u16())),
    };

    let app = Router::new()
        .route(path, post(record))
        .with_state(upstream.clone());

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(upstream)
}

pub fn recipient() -> Recipient {
    Recipient {
        email: "rakshankitchenlimited@gmail.com".to_owned(),
        phone: "+91 9310123565".to_owned(),
    }
}

#[allow(dead_code)]
pub fn valid_input() -> SubmitFormInput {
    SubmitFormInput {
        name: "Asha Verma".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: "9310123565".to_owned(),
        service: "modular".to_owned(),
        message: "Looking for a modular kitchen".to_owned(),
        submission_id: "c1d2e3f4-0000-4000-8000-000000000001".to_owned(),
    }
}

#[allow(dead_code)]
pub fn payload() -> SubmissionPayload {
    let input = valid_input();
    SubmissionPayload::new(&input, input.service.parse().ok(), &recipient())
}
