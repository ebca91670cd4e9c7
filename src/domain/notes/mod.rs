// src/domain/notes/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewNote, Note, NoteUpdate};
pub use repository::NoteRepository;
pub use services::{NoteSlugService, SLUG_WARNING};
pub use value_objects::{MAX_SLUG_LENGTH, MAX_TITLE_LENGTH, NoteId, NoteSlug, NoteText, NoteTitle};
