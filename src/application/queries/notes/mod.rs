mod detail;
mod list;
mod service;

pub use detail::GetNoteQuery;
pub use service::NoteQueryService;
