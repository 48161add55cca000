use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,            // user id
    pub username: String,
    pub token_kind: TokenKind,
    pub exp: i64,             // expiration timestamp
    pub iat: i64,             // issued at timestamp
}

fn create_token(
    user_id: Uuid,
    username: &str,
    kind: TokenKind,
    lifetime: Duration,
    secret: &str,
) -> AppResult<String> {
    let now = Utc::now();
    let exp = now + lifetime;

    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        token_kind: kind,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
}

pub fn create_access_token(
    user_id: Uuid,
    username: &str,
    secret: &str,
    minutes: i64,
) -> AppResult<String> {
    create_token(
        user_id,
        username,
        TokenKind::Access,
        Duration::minutes(minutes),
        secret,
    )
}

pub fn create_refresh_token(
    user_id: Uuid,
    username: &str,
    secret: &str,
    days: i64,
) -> AppResult<String> {
    create_token(
        user_id,
        username,
        TokenKind::Refresh,
        Duration::days(days),
        secret,
    )
}

pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn access_token_round_trips() {
        let user_id = Uuid::new_v4();
        let token = create_access_token(user_id, "alice", SECRET, 60).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.token_kind, TokenKind::Access);
    }

    #[test]
    fn refresh_token_carries_kind() {
        let token = create_refresh_token(Uuid::new_v4(), "alice", SECRET, 7).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();

        assert_eq!(claims.token_kind, TokenKind::Refresh);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_access_token(Uuid::new_v4(), "alice", SECRET, 60).unwrap();
        assert!(verify_token(&token, "other-secret").is_err());
    }
}
