// src/domain/notes/entity.rs
use crate::domain::access::Owned;
use crate::domain::notes::value_objects::{NoteId, NoteSlug, NoteText, NoteTitle};
use crate::domain::user::UserId;

#[derive(Debug, Clone)]
pub struct Note {
    pub id: NoteId,
    pub title: NoteTitle,
    pub text: NoteText,
    pub slug: NoteSlug,
    pub author_id: UserId,
}

impl Owned for Note {
    fn owner(&self) -> UserId {
        self.author_id
    }
}

#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: NoteTitle,
    pub text: NoteText,
    pub slug: NoteSlug,
    pub author_id: UserId,
}

/// Full replacement of the mutable note fields; the owner never changes.
#[derive(Debug, Clone)]
pub struct NoteUpdate {
    pub id: NoteId,
    pub title: NoteTitle,
    pub text: NoteText,
    pub slug: NoteSlug,
}
