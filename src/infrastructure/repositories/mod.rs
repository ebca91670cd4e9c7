// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_news;
mod sqlite_note;
mod sqlite_user;

pub use sqlite_news::{SqliteArticleRepository, SqliteCommentRepository};
pub use sqlite_note::SqliteNoteRepository;
pub use sqlite_user::SqliteUserRepository;
