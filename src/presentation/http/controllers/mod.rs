// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod news;
pub mod notes;
