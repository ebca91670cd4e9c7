// src/application/commands/notes/service.rs
use std::sync::Arc;

use tracing::warn;

use crate::{
    application::error::{ApplicationError, ApplicationResult, split_field_errors},
    domain::{
        notes::{NoteId, NoteRepository, NoteSlug, NoteSlugService, NoteText, NoteTitle},
        validation::{FieldErrors, FieldResultExt, combine},
    },
};

pub struct NoteCommandService {
    pub(super) repo: Arc<dyn NoteRepository>,
    pub(super) slug_service: Arc<NoteSlugService>,
}

/// A submitted note after every field passed validation.
pub(super) struct ValidNote {
    pub title: NoteTitle,
    pub text: NoteText,
    pub slug: NoteSlug,
}

impl NoteCommandService {
    pub fn new(repo: Arc<dyn NoteRepository>, slug_service: Arc<NoteSlugService>) -> Self {
        Self { repo, slug_service }
    }

    /// Validate all note fields together so the caller sees every problem at
    /// once. The slug is only resolved once the title it may derive from is valid.
    pub(super) async fn validate(
        &self,
        title: String,
        text: String,
        slug: Option<&str>,
        editing: Option<NoteId>,
    ) -> ApplicationResult<ValidNote> {
        let title = NoteTitle::new(title).for_field("title");
        let text = NoteText::new(text).for_field("text");
        let slug = match &title {
            Ok(title) => split_field_errors(self.slug_service.resolve(title, slug, editing).await)?,
            Err(_) => Err(FieldErrors::new()),
        };

        let ((title, text), slug) = combine(combine(title, text), slug).map_err(|errors| {
            warn!(%errors, "note rejected");
            ApplicationError::InvalidFields(errors)
        })?;
        Ok(ValidNote { title, text, slug })
    }
}

/// A path slug that can never be stored cannot name an existing note.
pub(super) fn path_slug(raw: String) -> ApplicationResult<NoteSlug> {
    NoteSlug::new(raw).map_err(|_| ApplicationError::not_found("note not found"))
}
