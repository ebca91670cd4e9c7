// src/application/commands/news/create.rs
use tracing::info;

use super::{CommentCommandService, service::validate_text};
use crate::{
    application::{
        access::require_identity,
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::news::{ArticleId, NewComment},
};

pub struct CreateCommentCommand {
    pub news_id: i64,
    pub text: String,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let actor = require_identity(actor)?;

        let article_id = ArticleId::new(command.news_id)
            .map_err(|_| ApplicationError::not_found("news not found"))?;
        let article = self
            .article_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news not found"))?;

        let text = validate_text(command.text)?;

        let created = self
            .comment_repo
            .insert(NewComment {
                article_id: article.id,
                author_id: actor.id,
                text,
                created: self.clock.now(),
            })
            .await?;

        info!(
            comment_id = i64::from(created.id),
            news_id = %article.id,
            author_id = %actor.id,
            "comment created"
        );
        Ok(created.into())
    }
}
