use crate::domain::errors::DomainResult;
use crate::domain::notes::entity::{NewNote, Note, NoteUpdate};
use crate::domain::notes::value_objects::{NoteId, NoteSlug};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn insert(&self, note: NewNote) -> DomainResult<Note>;
    /// Matches only when `author` owns the note.
    async fn find_owned_by_slug(&self, slug: &NoteSlug, author: UserId)
    -> DomainResult<Option<Note>>;
    /// Whether any note other than `exclude` already uses `slug`.
    async fn slug_taken(&self, slug: &NoteSlug, exclude: Option<NoteId>) -> DomainResult<bool>;
    async fn list_by_author(&self, author: UserId) -> DomainResult<Vec<Note>>;
    async fn update(&self, update: NoteUpdate) -> DomainResult<Note>;
    async fn delete(&self, id: NoteId) -> DomainResult<()>;
}
