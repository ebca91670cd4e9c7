use super::NewsQueryService;
use crate::{
    application::{
        access::can_write,
        dto::{AuthenticatedUser, NewsDetailDto, news::comment_form},
        error::{ApplicationError, ApplicationResult},
    },
    domain::news::ArticleId,
};

pub struct GetNewsDetailQuery {
    pub id: i64,
}

impl NewsQueryService {
    pub async fn get_news_detail(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetNewsDetailQuery,
    ) -> ApplicationResult<NewsDetailDto> {
        let id = ArticleId::new(query.id).map_err(|_| ApplicationError::not_found("news not found"))?;
        let article = self
            .article_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news not found"))?;

        let comments = self.comment_repo.list_for_article(article.id).await?;

        Ok(NewsDetailDto {
            news: article.into(),
            comments: comments.into_iter().map(Into::into).collect(),
            form: can_write(actor).then(|| comment_form(None)),
        })
    }
}
