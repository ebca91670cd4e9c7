use crate::domain::validation::FieldErrors;

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

/// Length and "not only digits" checks, reported on the `password` field.
pub(super) fn validate_password(password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.add(
            "password",
            format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
        );
    }
    if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
        errors.add("password", "password cannot be entirely numeric");
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
