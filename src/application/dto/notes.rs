use crate::domain::notes::{MAX_SLUG_LENGTH, MAX_TITLE_LENGTH, Note};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{FormDto, FormFieldDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteDto {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub slug: String,
    pub author_id: i64,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        Self {
            id: note.id.into(),
            title: note.title.into_inner(),
            text: note.text.into_inner(),
            slug: note.slug.into_inner(),
            author_id: note.author_id.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteEditDto {
    pub note: NoteDto,
    pub form: FormDto,
}

/// Note form, pre-filled from `current` when editing.
pub fn note_form(current: Option<&NoteDto>) -> FormDto {
    let title = FormFieldDto::required("title").max_length(MAX_TITLE_LENGTH);
    let text = FormFieldDto::required("text");
    let slug = FormFieldDto::optional("slug").max_length(MAX_SLUG_LENGTH);
    let fields = match current {
        Some(note) => vec![
            title.value(&note.title),
            text.value(&note.text),
            slug.value(&note.slug),
        ],
        None => vec![title, text, slug],
    };
    FormDto::new(fields)
}
