// src/application/commands/news/delete.rs
use tracing::info;

use super::{CommentCommandService, service::comment_id};
use crate::application::{
    access::{require_identity, require_owner},
    dto::AuthenticatedUser,
    error::ApplicationResult,
};

pub struct DeleteCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    /// Delete an owned comment, returning the id of the news it belonged to.
    pub async fn delete_comment(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<i64> {
        let actor = require_identity(actor)?;
        let id = comment_id(command.id)?;

        let found = self.comment_repo.find_owned(id, actor.id).await?;
        let comment = require_owner(actor, found, "comment")?;

        self.comment_repo.delete(comment.id).await?;
        info!(comment_id = command.id, author_id = %actor.id, "comment deleted");
        Ok(comment.article_id.into())
    }
}
