use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use validator::{Validate, ValidationError};

use crate::Service;

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone regex is valid"));

#[derive(Validate, Default, Clone, Debug)]
pub struct SubmitFormInput {
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(regex(path = *PHONE_REGEX))]
    pub phone: String,
    #[validate(custom(function = "known_service"))]
    pub service: String,
    #[validate(length(max = 2000))]
    pub message: String,
    #[validate(custom(function = "uuid_or_empty"))]
    pub submission_id: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

fn uuid_or_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }

    uuid::Uuid::parse_str(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("submission_id"))
}

fn known_service(value: &str) -> Result<(), ValidationError> {
    Service::from_str(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("unknown_service"))
}
