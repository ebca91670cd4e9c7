use super::NewsQueryService;
use crate::{
    application::{
        access::{require_identity, require_owner},
        dto::{AuthenticatedUser, CommentEditDto, news::comment_form},
        error::{ApplicationError, ApplicationResult},
    },
    domain::news::CommentId,
};

pub struct GetCommentForEditQuery {
    pub id: i64,
}

impl NewsQueryService {
    /// The actor's own comment together with a pre-filled edit form.
    pub async fn get_comment_for_edit(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetCommentForEditQuery,
    ) -> ApplicationResult<CommentEditDto> {
        let actor = require_identity(actor)?;
        let id = CommentId::new(query.id).map_err(|_| ApplicationError::not_found("comment not found"))?;

        let found = self.comment_repo.find_owned(id, actor.id).await?;
        let comment = require_owner(actor, found, "comment")?;

        let form = comment_form(Some(comment.text.as_str()));
        Ok(CommentEditDto {
            comment: comment.into(),
            form,
        })
    }
}
