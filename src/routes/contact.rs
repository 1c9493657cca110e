use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use rakshan_contact::{ContactForm, Service, SubmissionStatus, SubmitFormInput};
use rakshan_shared::Error;
use serde::Deserialize;
use strum::VariantArray;

use crate::{
    routes::AppState,
    template::{Notice, PENDING_MESSAGE, Page, Template},
};

pub struct ServiceOption {
    pub identifier: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub page: Page,
    pub form: ContactForm,
    pub services: Vec<ServiceOption>,
    pub notice: Option<Notice>,
}

impl ContactTemplate {
    pub fn new(page: Page, form: ContactForm, notice: Option<Notice>) -> Self {
        let services = Service::VARIANTS
            .iter()
            .map(|service| ServiceOption {
                identifier: service.identifier(),
                label: service.label(),
                selected: form.is_selected(service),
            })
            .collect();

        Self {
            page,
            form,
            services,
            notice,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "partials/message-field.html")]
pub struct MessageFieldTemplate {
    pub message: String,
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub service: Option<String>,
}

pub async fn page(template: Template, Query(query): Query<PageQuery>) -> impl IntoResponse {
    let form = ContactForm::prefill(query.service.as_deref());

    template.render(ContactTemplate::new(template.page(), form, None))
}

#[derive(Deserialize)]
pub struct SelectServiceInput {
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
}

pub async fn select_service(
    template: Template,
    Form(input): Form<SelectServiceInput>,
) -> impl IntoResponse {
    let mut form = ContactForm {
        message: input.message,
        ..Default::default()
    };
    form.select_service(&input.service);

    template.render(MessageFieldTemplate {
        message: form.message,
    })
}

#[derive(Deserialize)]
pub struct ActionInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub submission_id: String,
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let input = SubmitFormInput {
        name: input.name,
        email: input.email,
        phone: input.phone,
        service: input.service,
        message: input.message,
        submission_id: input.submission_id,
    };
    let mut form = ContactForm::from(&input);

    let (status, notice) = match app_state
        .contact_command
        .submit_form(&mut form, input)
        .await
    {
        Ok(_) => (StatusCode::OK, status_notice(form.status)),
        Err(err @ Error::Validate(_)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Some(Notice::error(validation_message(err.invalid_field().as_deref()))),
        ),
        Err(Error::Pending) => (StatusCode::CONFLICT, Some(Notice::error(PENDING_MESSAGE))),
    };

    template.render_with_status(status, ContactTemplate::new(template.page(), form, notice))
}

fn status_notice(status: SubmissionStatus) -> Option<Notice> {
    let message = status.message()?;

    Some(match status {
        SubmissionStatus::Succeeded => Notice::success(message),
        _ => Notice::error(message),
    })
}

fn validation_message(field: Option<&str>) -> &'static str {
    match field {
        Some("name") => "Please enter your name.",
        Some("email") => "Please enter a valid email address.",
        Some("phone") => "Please enter a valid 10-digit phone number.",
        Some("service") => "Please select a service.",
        Some("message") => "Your message is too long.",
        Some("submission_id") => "Please reload the page and try again.",
        _ => "Please check the form and try again.",
    }
}
