// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{news::CommentCommandService, notes::NoteCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{news::NewsQueryService, notes::NoteQueryService, users::UserQueryService},
    },
    domain::{
        news::{ArticleReadRepository, CommentRepository},
        notes::{NoteRepository, NoteSlugService},
        user::UserRepository,
    },
};

/// Repositories and adapters the application services are wired from.
pub struct ServiceDependencies {
    pub user_repo: Arc<dyn UserRepository>,
    pub article_repo: Arc<dyn ArticleReadRepository>,
    pub comment_repo: Arc<dyn CommentRepository>,
    pub note_repo: Arc<dyn NoteRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub news_on_home_page: u32,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub news_queries: Arc<NewsQueryService>,
    pub note_commands: Arc<NoteCommandService>,
    pub note_queries: Arc<NoteQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.password_hasher),
            Arc::clone(&deps.token_manager),
            Arc::clone(&deps.clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&deps.user_repo)));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&deps.article_repo),
            Arc::clone(&deps.comment_repo),
            Arc::clone(&deps.clock),
        ));
        let news_queries = Arc::new(NewsQueryService::new(
            Arc::clone(&deps.article_repo),
            Arc::clone(&deps.comment_repo),
            deps.news_on_home_page,
        ));

        let slug_service = Arc::new(NoteSlugService::new(
            Arc::clone(&deps.note_repo),
            Arc::clone(&deps.slugger),
        ));
        let note_commands = Arc::new(NoteCommandService::new(
            Arc::clone(&deps.note_repo),
            slug_service,
        ));
        let note_queries = Arc::new(NoteQueryService::new(Arc::clone(&deps.note_repo)));

        Self {
            user_commands,
            user_queries,
            comment_commands,
            news_queries,
            note_commands,
            note_queries,
            token_manager: deps.token_manager,
        }
    }

    /// Verify a raw bearer token and recover the identity it carries.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
