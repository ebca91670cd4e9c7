// src/application/commands/notes/create.rs
use tracing::info;

use super::NoteCommandService;
use crate::{
    application::{
        access::require_identity,
        dto::{AuthenticatedUser, NoteDto},
        error::ApplicationResult,
    },
    domain::notes::NewNote,
};

pub struct CreateNoteCommand {
    pub title: String,
    pub text: String,
    /// Blank or missing means "derive from the title".
    pub slug: Option<String>,
}

impl NoteCommandService {
    pub async fn create_note(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: CreateNoteCommand,
    ) -> ApplicationResult<NoteDto> {
        let actor = require_identity(actor)?;
        let valid = self
            .validate(command.title, command.text, command.slug.as_deref(), None)
            .await?;

        let note = self
            .repo
            .insert(NewNote {
                title: valid.title,
                text: valid.text,
                slug: valid.slug,
                author_id: actor.id,
            })
            .await?;

        info!(note_id = i64::from(note.id), slug = %note.slug, author_id = %actor.id, "note created");
        Ok(note.into())
    }
}
