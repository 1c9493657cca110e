use serde::{Deserialize, Serialize};

use crate::{NOT_SPECIFIED, Service, SubmitFormInput};

/// Where the business receives inquiries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recipient {
    pub email: String,
    pub phone: String,
}

/// Record sent to both the email service and the SMS endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub from_name: String,
    pub from_email: String,
    pub phone_number: String,
    pub service: String,
    pub message: String,
    pub to_email: String,
    pub to_phone: String,
}

impl SubmissionPayload {
    pub fn new(input: &SubmitFormInput, service: Option<Service>, recipient: &Recipient) -> Self {
        Self {
            from_name: input.name.trim().to_owned(),
            from_email: input.email.trim().to_owned(),
            phone_number: input.phone.to_owned(),
            service: service
                .map(|service| service.label())
                .unwrap_or(NOT_SPECIFIED)
                .to_owned(),
            message: input.message.to_owned(),
            to_email: recipient.email.to_owned(),
            to_phone: recipient.phone.to_owned(),
        }
    }
}
