// src/domain/validation.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use std::{collections::BTreeMap, fmt};

/// Field-level validation messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn merge(&mut self, other: Self) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str, message: &str) -> bool {
        self.get(field)
            .is_some_and(|messages| messages.iter().any(|m| m == message))
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Attaches value-object validation failures to the form field they came from.
pub trait FieldResultExt<T> {
    fn for_field(self, field: &str) -> Result<T, FieldErrors>;
}

impl<T> FieldResultExt<T> for DomainResult<T> {
    fn for_field(self, field: &str) -> Result<T, FieldErrors> {
        self.map_err(|err| match err {
            DomainError::Validation(message) => FieldErrors::single(field, message),
            DomainError::InvalidFields(errors) => errors,
            other => FieldErrors::single(field, other.to_string()),
        })
    }
}

/// Combine two independently validated fields, reporting every failure.
pub fn combine<A, B>(
    a: Result<A, FieldErrors>,
    b: Result<B, FieldErrors>,
) -> Result<(A, B), FieldErrors> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(errors), Ok(_)) | (Ok(_), Err(errors)) => Err(errors),
        (Err(mut first), Err(second)) => {
            first.merge(second);
            Err(first)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_collects_errors_from_both_fields() {
        let title: Result<(), _> = Err(FieldErrors::single("title", "title cannot be empty"));
        let text: Result<(), _> = Err(FieldErrors::single("text", "text cannot be empty"));

        let errors = combine(title, text).unwrap_err();
        assert!(errors.contains("title", "title cannot be empty"));
        assert!(errors.contains("text", "text cannot be empty"));
    }

    #[test]
    fn for_field_maps_validation_message() {
        let result: DomainResult<()> = Err(DomainError::Validation("too long".into()));
        let errors = result.for_field("slug").unwrap_err();
        assert_eq!(errors.get("slug"), Some(&["too long".to_string()][..]));
    }

    #[test]
    fn display_lists_every_message() {
        let mut errors = FieldErrors::single("slug", "taken");
        errors.add("title", "empty");
        assert_eq!(errors.to_string(), "slug: taken; title: empty");
    }
}
