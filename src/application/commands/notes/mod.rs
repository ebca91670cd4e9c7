// src/application/commands/notes/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateNoteCommand;
pub use delete::DeleteNoteCommand;
pub use service::NoteCommandService;
pub use update::UpdateNoteCommand;
