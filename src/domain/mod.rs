pub mod access;
pub mod errors;
pub mod news;
pub mod notes;
pub mod user;
pub mod validation;
