pub mod auth;
pub mod forms;
pub mod news;
pub mod notes;
pub mod serde_time;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use forms::{FormDto, FormFieldDto};
pub use news::{ArticleDto, CommentDto, CommentEditDto, NewsDetailDto};
pub use notes::{NoteDto, NoteEditDto};
pub use users::UserDto;
