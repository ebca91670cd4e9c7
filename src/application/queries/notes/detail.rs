use super::NoteQueryService;
use crate::{
    application::{
        access::{require_identity, require_owner},
        dto::{AuthenticatedUser, NoteDto, NoteEditDto, notes::note_form},
        error::{ApplicationError, ApplicationResult},
    },
    domain::notes::NoteSlug,
};

pub struct GetNoteQuery {
    pub slug: String,
}

impl NoteQueryService {
    /// Owner-only; any other caller sees "not found".
    pub async fn get_note(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetNoteQuery,
    ) -> ApplicationResult<NoteDto> {
        let actor = require_identity(actor)?;
        let slug = NoteSlug::new(query.slug).map_err(|_| ApplicationError::not_found("note not found"))?;

        let found = self.repo.find_owned_by_slug(&slug, actor.id).await?;
        Ok(require_owner(actor, found, "note")?.into())
    }

    pub async fn get_note_for_edit(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetNoteQuery,
    ) -> ApplicationResult<NoteEditDto> {
        let note = self.get_note(actor, query).await?;
        let form = note_form(Some(&note));
        Ok(NoteEditDto { note, form })
    }
}
