use std::sync::Arc;

use crate::domain::news::{ArticleReadRepository, CommentRepository};

pub struct NewsQueryService {
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) home_page_size: u32,
}

impl NewsQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        home_page_size: u32,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
            home_page_size,
        }
    }
}
