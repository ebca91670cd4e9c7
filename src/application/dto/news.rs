use crate::domain::news::{Article, Comment};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{FormDto, FormFieldDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub date: NaiveDate,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            text: article.text.into_inner(),
            date: article.date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub news_id: i64,
    pub author_id: i64,
    pub text: String,
    #[serde(with = "serde_time")]
    pub created: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            news_id: comment.article_id.into(),
            author_id: comment.author_id.into(),
            text: comment.text.into_inner(),
            created: comment.created,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsDetailDto {
    pub news: ArticleDto,
    pub comments: Vec<CommentDto>,
    /// Only offered to authenticated callers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<FormDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentEditDto {
    pub comment: CommentDto,
    pub form: FormDto,
}

pub fn comment_form(current: Option<&str>) -> FormDto {
    let field = FormFieldDto::required("text");
    FormDto::new(vec![match current {
        Some(text) => field.value(text),
        None => field,
    }])
}
