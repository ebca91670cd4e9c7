// src/domain/news/mod.rs
pub mod entity;
pub mod moderation;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, Comment, NewArticle, NewComment};
pub use repository::{ArticleReadRepository, ArticleWriteRepository, CommentRepository};
pub use value_objects::{ArticleId, ArticleText, ArticleTitle, CommentId, CommentText};
