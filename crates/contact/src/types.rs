use strum::{EnumMessage, EnumString, IntoStaticStr, VariantArray};

/// Label used in the payload when no catalog entry matches the selection.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Offerings listed in the service dropdown.
#[derive(EnumString, EnumMessage, IntoStaticStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Service {
    #[strum(serialize = "custom-design", message = "Custom Kitchen Design")]
    CustomDesign,
    #[strum(serialize = "renovation", message = "Kitchen Renovation")]
    Renovation,
    #[strum(serialize = "modular", message = "Modular Solutions")]
    Modular,
    #[strum(serialize = "material", message = "Material Selection")]
    Material,
}

impl Service {
    pub fn identifier(&self) -> &'static str {
        self.into()
    }

    pub fn label(&self) -> &'static str {
        self.get_message().unwrap_or(NOT_SPECIFIED)
    }

    /// Sentence written into the message field when this service gets selected.
    pub fn interest_message(&self) -> String {
        format!(
            "I'm interested in your {} service. Please provide more information.",
            self.label()
        )
    }
}
