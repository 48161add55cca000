use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::pod::PodType;
use crate::entities::{profile, user};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::{create_access_token, create_refresh_token, verify_token, TokenKind};
use crate::AppState;

const DEFAULT_CREDITS: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 2); // 10000.00

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub password: String,
    pub password2: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// Register a new account. Creates the user and its profile in one
/// transaction so a profile always exists for every user.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    if payload.password != payload.password2 {
        return Err(AppError::validation("password", "Passwords do not match."));
    }
    if payload.password.len() < 8 {
        return Err(AppError::validation(
            "password",
            "Password must be at least 8 characters.",
        ));
    }

    let existing = user::Entity::find()
        .filter(user::Column::Username.eq(&payload.username))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::validation(
            "username",
            "A user with that username already exists.",
        ));
    }

    let existing = user::Entity::find()
        .filter(user::Column::Email.eq(&payload.email))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::validation(
            "email",
            "A user with that email already exists.",
        ));
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(payload.password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    let now = Utc::now();
    let txn = state.db.begin().await?;

    let new_user = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(payload.username.clone()),
        email: Set(payload.email.clone()),
        password_hash: Set(password_hash),
        first_name: Set(payload.first_name.clone()),
        last_name: Set(payload.last_name.clone()),
        created_at: Set(now.into()),
    };
    let user = new_user.insert(&txn).await?;

    let new_profile = profile::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.id),
        bio: Set(String::new()),
        passport_id: Set(String::new()),
        phone: Set(String::new()),
        date_of_birth: Set(None),
        credits_balance: Set(DEFAULT_CREDITS),
        preferred_pod_type: Set(PodType::Standard),
        avatar_url: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    new_profile.insert(&txn).await?;

    txn.commit().await?;

    tracing::info!(username = %user.username, "Account registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: format!("Welcome, {}! Your account has been created.", user.username),
        }),
    ))
}

/// Login with username and password, returning an access/refresh token pair
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<TokenPairResponse>> {
    let user = user::Entity::find()
        .filter(user::Column::Username.eq(&payload.username))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|e| AppError::Internal(format!("Failed to parse password hash: {}", e)))?;

    Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized("Invalid username or password".to_string()))?;

    let access = create_access_token(
        user.id,
        &user.username,
        &state.config.jwt_secret,
        state.config.access_token_minutes,
    )?;
    let refresh = create_refresh_token(
        user.id,
        &user.username,
        &state.config.jwt_secret,
        state.config.refresh_token_days,
    )?;

    Ok(Json(TokenPairResponse { access, refresh }))
}

/// Exchange a refresh token for a new access token
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> AppResult<Json<RefreshResponse>> {
    let claims = verify_token(&payload.refresh, &state.config.jwt_secret)?;

    if claims.token_kind != TokenKind::Refresh {
        return Err(AppError::Unauthorized("Refresh token required".to_string()));
    }

    // The account may have been deleted since the token was issued
    let user = user::Entity::find_by_id(claims.sub)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Unknown account".to_string()))?;

    let access = create_access_token(
        user.id,
        &user.username,
        &state.config.jwt_secret,
        state.config.access_token_minutes,
    )?;

    Ok(Json(RefreshResponse { access }))
}
