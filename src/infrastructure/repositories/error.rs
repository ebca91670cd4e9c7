use crate::domain::errors::DomainError;

const UNIQUE_NOTE_SLUG: &str = "notes.slug";
const UNIQUE_USERNAME: &str = "users.username";

/// SQLite reports constraints only in the message text, e.g.
/// `UNIQUE constraint failed: notes.slug`.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            if db_err.is_unique_violation() {
                return if message.contains(UNIQUE_NOTE_SLUG) {
                    DomainError::Conflict("slug already exists".into())
                } else if message.contains(UNIQUE_USERNAME) {
                    DomainError::Conflict("username already exists".into())
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                };
            }
            if db_err.is_foreign_key_violation() {
                return DomainError::NotFound("referenced record not found".into());
            }
            DomainError::Persistence(message.to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
