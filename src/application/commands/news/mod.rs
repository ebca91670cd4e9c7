// src/application/commands/news/mod.rs
mod create;
mod delete;
mod edit;
mod service;

pub use create::CreateCommentCommand;
pub use delete::DeleteCommentCommand;
pub use edit::EditCommentCommand;
pub use service::CommentCommandService;
