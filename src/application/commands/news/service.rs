// src/application/commands/news/service.rs
use std::sync::Arc;

use tracing::warn;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        news::{ArticleReadRepository, CommentId, CommentRepository, CommentText, moderation},
        validation::FieldResultExt,
    },
};

pub struct CommentCommandService {
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
            clock,
        }
    }
}

/// Shape check followed by the banned-word filter.
pub(super) fn validate_text(text: String) -> ApplicationResult<CommentText> {
    CommentText::new(text)
        .for_field("text")
        .and_then(moderation::ensure_clean)
        .map_err(|errors| {
            warn!(%errors, "comment rejected");
            ApplicationError::InvalidFields(errors)
        })
}

/// Ids outside the valid range cannot name a comment.
pub(super) fn comment_id(raw: i64) -> ApplicationResult<CommentId> {
    CommentId::new(raw).map_err(|_| ApplicationError::not_found("comment not found"))
}
