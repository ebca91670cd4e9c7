// src/domain/news/entity.rs
use crate::domain::access::Owned;
use crate::domain::news::value_objects::{
    ArticleId, ArticleText, ArticleTitle, CommentId, CommentText,
};
use crate::domain::user::UserId;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub text: ArticleText,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub text: ArticleText,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub text: CommentText,
    pub created: DateTime<Utc>,
}

impl Comment {
    /// Only the text is mutable; the article and author stay fixed.
    pub fn set_text(&mut self, text: CommentText) {
        self.text = text;
    }
}

impl Owned for Comment {
    fn owner(&self) -> UserId {
        self.author_id
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub text: CommentText,
    pub created: DateTime<Utc>,
}
