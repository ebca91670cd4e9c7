use crate::domain::errors::DomainResult;
use crate::domain::news::entity::{Article, Comment, NewArticle, NewComment};
use crate::domain::news::value_objects::{ArticleId, CommentId, CommentText};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Newest publish date first, at most `limit` rows.
    async fn list_latest(&self, limit: u32) -> DomainResult<Vec<Article>>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    /// Matches only when `author` wrote the comment.
    async fn find_owned(&self, id: CommentId, author: UserId) -> DomainResult<Option<Comment>>;
    async fn update_text(&self, id: CommentId, text: &CommentText) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
    /// Oldest stored `created` timestamp first.
    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;
}
