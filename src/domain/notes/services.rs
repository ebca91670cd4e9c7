// src/domain/notes/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::notes::repository::NoteRepository;
use crate::domain::notes::value_objects::{MAX_SLUG_LENGTH, NoteId, NoteSlug, NoteTitle};
use crate::domain::validation::{FieldErrors, FieldResultExt};

pub const SLUG_WARNING: &str = " - такой slug уже существует, придумайте уникальный slug!";

/// Domain service that settles which slug a submitted note ends up with.
pub struct NoteSlugService {
    repo: Arc<dyn NoteRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl NoteSlugService {
    pub fn new(repo: Arc<dyn NoteRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    /// A supplied slug must be free (ignoring the note being edited). A blank
    /// one is derived from the title and used without a uniqueness check.
    pub async fn resolve(
        &self,
        title: &NoteTitle,
        requested: Option<&str>,
        editing: Option<NoteId>,
    ) -> DomainResult<NoteSlug> {
        match requested.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => {
                let slug = NoteSlug::new(value).for_field("slug")?;
                if self.repo.slug_taken(&slug, editing).await? {
                    return Err(FieldErrors::single("slug", format!("{slug}{SLUG_WARNING}")).into());
                }
                Ok(slug)
            }
            None => Ok(self.derive(title).for_field("slug")?),
        }
    }

    fn derive(&self, title: &NoteTitle) -> DomainResult<NoteSlug> {
        let derived: String = self
            .generator
            .slugify(title.as_str())
            .chars()
            .take(MAX_SLUG_LENGTH)
            .collect();
        NoteSlug::new(derived)
    }
}
