#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("submission already in progress")]
    Pending,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// First invalid field name, alphabetically, when this is a validation error.
    pub fn invalid_field(&self) -> Option<String> {
        let Self::Validate(errors) = self else {
            return None;
        };

        errors
            .field_errors()
            .into_keys()
            .map(|field| field.to_string())
            .min()
    }
}
