// src/application/commands/notes/delete.rs
use tracing::info;

use super::{NoteCommandService, service::path_slug};
use crate::application::{
    access::{require_identity, require_owner},
    dto::AuthenticatedUser,
    error::ApplicationResult,
};

pub struct DeleteNoteCommand {
    pub slug: String,
}

impl NoteCommandService {
    pub async fn delete_note(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeleteNoteCommand,
    ) -> ApplicationResult<()> {
        let actor = require_identity(actor)?;
        let slug = path_slug(command.slug)?;

        let found = self.repo.find_owned_by_slug(&slug, actor.id).await?;
        let note = require_owner(actor, found, "note")?;

        self.repo.delete(note.id).await?;
        info!(note_id = i64::from(note.id), slug = %note.slug, "note deleted");
        Ok(())
    }
}
