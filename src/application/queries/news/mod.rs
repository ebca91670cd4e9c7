mod comment_form;
mod detail;
mod home;
mod service;

pub use comment_form::GetCommentForEditQuery;
pub use detail::GetNewsDetailQuery;
pub use service::NewsQueryService;
