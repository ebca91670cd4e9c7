// src/application/commands/news/edit.rs
use tracing::info;

use super::{
    CommentCommandService,
    service::{comment_id, validate_text},
};
use crate::application::{
    access::{require_identity, require_owner},
    dto::{AuthenticatedUser, CommentDto},
    error::ApplicationResult,
};

pub struct EditCommentCommand {
    pub id: i64,
    pub text: String,
}

impl CommentCommandService {
    /// Replace the text of a comment the actor wrote.
    pub async fn edit_comment(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: EditCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let actor = require_identity(actor)?;
        let id = comment_id(command.id)?;

        let found = self.comment_repo.find_owned(id, actor.id).await?;
        let mut comment = require_owner(actor, found, "comment")?;

        let text = validate_text(command.text)?;
        let stored = self.comment_repo.update_text(comment.id, &text).await?;
        comment.set_text(stored.text);

        info!(comment_id = command.id, author_id = %actor.id, "comment edited");
        Ok(comment.into())
    }
}
