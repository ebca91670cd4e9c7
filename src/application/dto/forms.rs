// src/application/dto/forms.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Machine-readable description of a form a client may submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormDto {
    pub fields: Vec<FormFieldDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormFieldDto {
    pub name: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FormFieldDto {
    pub fn required(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required: true,
            max_length: None,
            value: None,
        }
    }

    pub fn optional(name: &str) -> Self {
        Self {
            required: false,
            ..Self::required(name)
        }
    }

    #[must_use]
    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl FormDto {
    pub const fn new(fields: Vec<FormFieldDto>) -> Self {
        Self { fields }
    }
}
