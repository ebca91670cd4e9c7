// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use news_notes::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use news_notes::domain::user::UserId;

use super::time::fixed_now;

/// 検証に失敗するトークン
pub const INVALID_TOKEN: &str = "bad-token";

const TOKEN_PREFIX: &str = "user-";

/// Deterministic bearer token for the user with `id`.
pub fn token_for(id: i64) -> String {
    format!("{TOKEN_PREFIX}{id}")
}

/// Tokens are `user-<id>`; anything else is rejected.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = fixed_now();
        Ok(AuthTokenDto {
            token: token_for(i64::from(subject.user_id)),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let id = token
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|raw| raw.parse::<i64>().ok())
            .and_then(|raw| UserId::new(raw).ok())
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))?;

        let now = fixed_now();
        Ok(AuthenticatedUser {
            id,
            username: format!("user{id}"),
            issued_at: now,
            expires_at: now + Duration::hours(1),
        })
    }
}

/// 高速な平文ハッシャー（argon2 はテストには重い）
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash.strip_prefix("plain:") == Some(password) {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
