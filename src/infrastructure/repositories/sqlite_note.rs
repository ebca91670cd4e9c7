use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::notes::{
    NewNote, Note, NoteId, NoteRepository, NoteSlug, NoteText, NoteTitle, NoteUpdate,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const NOTE_COLUMNS: &str = "id, title, text, slug, author_id";

#[derive(Clone)]
pub struct SqliteNoteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteNoteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NoteRow {
    id: i64,
    title: String,
    text: String,
    slug: String,
    author_id: i64,
}

impl TryFrom<NoteRow> for Note {
    type Error = DomainError;

    fn try_from(row: NoteRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: NoteId::new(row.id)?,
            title: NoteTitle::new(row.title)?,
            text: NoteText::new(row.text)?,
            slug: NoteSlug::new(row.slug)?,
            author_id: UserId::new(row.author_id)?,
        })
    }
}

#[async_trait]
impl NoteRepository for SqliteNoteRepository {
    async fn insert(&self, note: NewNote) -> DomainResult<Note> {
        let NewNote {
            title,
            text,
            slug,
            author_id,
        } = note;

        let row = sqlx::query_as::<_, NoteRow>(&format!(
            "INSERT INTO notes (title, text, slug, author_id) VALUES (?, ?, ?, ?) RETURNING {NOTE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(text.as_str())
        .bind(slug.as_str())
        .bind(i64::from(author_id))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Note::try_from(row)
    }

    async fn find_owned_by_slug(
        &self,
        slug: &NoteSlug,
        author: UserId,
    ) -> DomainResult<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE slug = ? AND author_id = ?"
        ))
        .bind(slug.as_str())
        .bind(i64::from(author))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Note::try_from).transpose()
    }

    async fn slug_taken(&self, slug: &NoteSlug, exclude: Option<NoteId>) -> DomainResult<bool> {
        let taken: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM notes WHERE slug = ? AND (? IS NULL OR id <> ?))",
        )
        .bind(slug.as_str())
        .bind(exclude.map(i64::from))
        .bind(exclude.map(i64::from))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(taken)
    }

    async fn list_by_author(&self, author: UserId) -> DomainResult<Vec<Note>> {
        let rows = sqlx::query_as::<_, NoteRow>(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE author_id = ? ORDER BY id ASC"
        ))
        .bind(i64::from(author))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Note::try_from).collect()
    }

    async fn update(&self, update: NoteUpdate) -> DomainResult<Note> {
        let NoteUpdate {
            id,
            title,
            text,
            slug,
        } = update;

        let row = sqlx::query_as::<_, NoteRow>(&format!(
            "UPDATE notes SET title = ?, text = ?, slug = ? WHERE id = ? RETURNING {NOTE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(text.as_str())
        .bind(slug.as_str())
        .bind(i64::from(id))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Note::try_from(row)
    }

    async fn delete(&self, id: NoteId) -> DomainResult<()> {
        sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
