use tracing::debug;

use super::NoteQueryService;
use crate::application::{
    access::require_identity,
    dto::{AuthenticatedUser, NoteDto},
    error::ApplicationResult,
};

impl NoteQueryService {
    /// Notes owned by the actor, in creation order.
    pub async fn list_notes(&self, actor: Option<&AuthenticatedUser>) -> ApplicationResult<Vec<NoteDto>> {
        let actor = require_identity(actor)?;
        let notes = self.repo.list_by_author(actor.id).await?;
        debug!(count = notes.len(), author_id = %actor.id, "notes listed");
        Ok(notes.into_iter().map(Into::into).collect())
    }
}
