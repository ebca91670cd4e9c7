// src/application/commands/notes/update.rs
use tracing::info;

use super::{NoteCommandService, service::path_slug};
use crate::{
    application::{
        access::{require_identity, require_owner},
        dto::{AuthenticatedUser, NoteDto},
        error::ApplicationResult,
    },
    domain::notes::NoteUpdate,
};

pub struct UpdateNoteCommand {
    /// Slug the note is currently addressed by.
    pub current_slug: String,
    pub title: String,
    pub text: String,
    pub slug: Option<String>,
}

impl NoteCommandService {
    pub async fn update_note(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdateNoteCommand,
    ) -> ApplicationResult<NoteDto> {
        let actor = require_identity(actor)?;
        let current = path_slug(command.current_slug)?;

        let found = self.repo.find_owned_by_slug(&current, actor.id).await?;
        let note = require_owner(actor, found, "note")?;

        let valid = self
            .validate(command.title, command.text, command.slug.as_deref(), Some(note.id))
            .await?;

        let updated = self
            .repo
            .update(NoteUpdate {
                id: note.id,
                title: valid.title,
                text: valid.text,
                slug: valid.slug,
            })
            .await?;

        info!(note_id = i64::from(updated.id), slug = %updated.slug, "note updated");
        Ok(updated.into())
    }
}
