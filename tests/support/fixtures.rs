// tests/support/fixtures.rs
use chrono::{DateTime, NaiveDate, Utc};
use news_notes::{
    domain::{
        news::{
            ArticleId, ArticleText, ArticleTitle, ArticleWriteRepository,
            CommentRepository, CommentText, NewArticle, NewComment,
        },
        notes::{NewNote, NoteRepository, NoteSlug, NoteText, NoteTitle},
        user::{NewUser, PasswordHash, UserId, UserRepository, Username},
    },
    infrastructure::repositories::{
        SqliteArticleRepository, SqliteCommentRepository, SqliteNoteRepository,
        SqliteUserRepository,
    },
};
use std::sync::Arc;

use super::{helpers::TestApp, mocks::fixed_now};

impl TestApp {
    /// Insert a user whose password is `password123`; returns its id.
    pub async fn seed_user(&self, username: &str) -> i64 {
        let repo = SqliteUserRepository::new(Arc::clone(&self.pool));
        let user = repo
            .insert(NewUser::new(
                Username::new(username).unwrap(),
                PasswordHash::new("plain:password123").unwrap(),
                fixed_now(),
            ))
            .await
            .expect("seed user");
        user.id.into()
    }

    pub async fn seed_news(&self, title: &str, date: NaiveDate) -> i64 {
        let repo = SqliteArticleRepository::new(Arc::clone(&self.pool));
        let article = repo
            .insert(NewArticle {
                title: ArticleTitle::new(title).unwrap(),
                text: ArticleText::new("Просто текст.").unwrap(),
                date,
            })
            .await
            .expect("seed news");
        article.id.into()
    }

    pub async fn seed_comment(
        &self,
        news_id: i64,
        author_id: i64,
        text: &str,
        created: DateTime<Utc>,
    ) -> i64 {
        let repo = SqliteCommentRepository::new(Arc::clone(&self.pool));
        let comment = repo
            .insert(NewComment {
                article_id: ArticleId::new(news_id).unwrap(),
                author_id: UserId::new(author_id).unwrap(),
                text: CommentText::new(text).unwrap(),
                created,
            })
            .await
            .expect("seed comment");
        comment.id.into()
    }

    pub async fn seed_note(&self, author_id: i64, title: &str, slug: &str) -> i64 {
        let repo = SqliteNoteRepository::new(Arc::clone(&self.pool));
        let note = repo
            .insert(NewNote {
                title: NoteTitle::new(title).unwrap(),
                text: NoteText::new("Текст заметки").unwrap(),
                slug: NoteSlug::new(slug).unwrap(),
                author_id: UserId::new(author_id).unwrap(),
            })
            .await
            .expect("seed note");
        note.id.into()
    }

    pub async fn comment_text(&self, id: i64) -> Option<String> {
        sqlx::query_scalar("SELECT text FROM comments WHERE id = ?")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await
            .expect("read comment")
    }

    pub async fn note_row(&self, slug: &str) -> Option<(String, String, String, i64)> {
        sqlx::query_as("SELECT title, text, slug, author_id FROM notes WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&*self.pool)
            .await
            .expect("read note")
    }
}

/// The author and a second, unrelated user.
pub struct Users {
    pub author: i64,
    pub reader: i64,
}

pub async fn seed_users(app: &TestApp) -> Users {
    Users {
        author: app.seed_user("Автор").await,
        reader: app.seed_user("Читатель").await,
    }
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
