// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート
pub mod security;
pub mod time;

pub use security::{DummyPasswordHasher, DummyTokenManager, INVALID_TOKEN, token_for};
pub use time::{DummyClock, fixed_now};
