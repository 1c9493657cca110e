use std::str::FromStr;

use crate::{Service, SubmitFormInput};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "There was an error sending your message. Please try again or contact us directly.";

/// Outcome of the latest submit attempt, drives the feedback banner.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Idle | Self::Pending => None,
            Self::Succeeded => Some(SUCCESS_MESSAGE),
            Self::Failed => Some(FAILURE_MESSAGE),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// State of one visitor's contact form between two renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    pub submission_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: Option<Service>,
    pub message: String,
    pub status: SubmissionStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            submission_id: new_submission_id(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            service: None,
            message: String::new(),
            status: SubmissionStatus::Idle,
        }
    }
}

impl ContactForm {
    /// Builds the form shown on first render, selecting the service named by the
    /// `service` query parameter when it matches the catalog.
    pub fn prefill(service: Option<&str>) -> Self {
        let mut form = Self::default();

        if let Some(service) = service.and_then(|value| Service::from_str(value).ok()) {
            form.service = Some(service);
            form.message = service.interest_message();
        }

        form
    }

    /// Changes the selected service. A recognized service overwrites the message,
    /// user edits included.
    pub fn select_service(&mut self, value: &str) {
        self.service = Service::from_str(value).ok();

        if let Some(service) = self.service {
            self.message = service.interest_message();
        }
    }

    /// Clears every field and starts a new submission. Status is left as is.
    pub fn reset(&mut self) {
        *self = Self {
            status: self.status,
            ..Self::default()
        };
    }

    pub fn is_selected(&self, service: &Service) -> bool {
        self.service.as_ref() == Some(service)
    }
}

impl From<&SubmitFormInput> for ContactForm {
    fn from(input: &SubmitFormInput) -> Self {
        let submission_id = uuid::Uuid::parse_str(input.submission_id.trim())
            .map(|id| id.to_string())
            .unwrap_or_else(|_| new_submission_id());

        Self {
            submission_id,
            name: input.name.to_owned(),
            email: input.email.to_owned(),
            phone: input.phone.to_owned(),
            service: Service::from_str(&input.service).ok(),
            message: input.message.to_owned(),
            status: SubmissionStatus::Idle,
        }
    }
}

fn new_submission_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
