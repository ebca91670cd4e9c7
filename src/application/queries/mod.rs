pub mod news;
pub mod notes;
pub mod users;
