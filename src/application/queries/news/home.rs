use tracing::debug;

use super::NewsQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl NewsQueryService {
    /// The most recent news, newest publish date first.
    pub async fn list_home(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.article_repo.list_latest(self.home_page_size).await?;
        debug!(count = articles.len(), limit = self.home_page_size, "home page assembled");
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
