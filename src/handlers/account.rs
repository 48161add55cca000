use axum::{extract::State, Extension, Json};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::pod::PodType;
use crate::entities::{profile, user};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::Claims;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileInfo {
    pub id: Uuid,
    pub bio: String,
    pub passport_id: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub credits_balance: Decimal,
    pub preferred_pod_type: PodType,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile: ProfileInfo,
}

impl UserInfo {
    fn from_models(user: user::Model, profile: profile::Model) -> Self {
        UserInfo {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            profile: ProfileInfo {
                id: profile.id,
                bio: profile.bio,
                passport_id: profile.passport_id,
                phone: profile.phone,
                date_of_birth: profile.date_of_birth,
                credits_balance: profile.credits_balance,
                preferred_pod_type: profile.preferred_pod_type,
                avatar_url: profile.avatar_url,
            },
        }
    }
}

async fn load_user_with_profile(
    state: &AppState,
    user_id: Uuid,
) -> AppResult<(user::Model, profile::Model)> {
    let user = user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Unknown account".to_string()))?;

    let profile = profile::Entity::find()
        .filter(profile::Column::UserId.eq(user.id))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Internal(format!("User {} has no profile", user.id)))?;

    Ok((user, profile))
}

/// Current user with nested profile
pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<UserInfo>> {
    let (user, profile) = load_user_with_profile(&state, claims.sub).await?;
    Ok(Json(UserInfo::from_models(user, profile)))
}

#[derive(Debug, Deserialize)]
pub struct UpdateMeRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Partial update of the current user's name and email
pub async fn update_me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateMeRequest>,
) -> AppResult<Json<UserInfo>> {
    let (user, profile) = load_user_with_profile(&state, claims.sub).await?;

    if let Some(email) = &payload.email {
        let taken = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::Id.ne(user.id))
            .one(&state.db)
            .await?;
        if taken.is_some() {
            return Err(AppError::validation(
                "email",
                "A user with that email already exists.",
            ));
        }
    }

    let mut active: user::ActiveModel = user.into();
    if let Some(email) = payload.email {
        active.email = Set(email);
    }
    if let Some(first_name) = payload.first_name {
        active.first_name = Set(first_name);
    }
    if let Some(last_name) = payload.last_name {
        active.last_name = Set(last_name);
    }
    let user = active.update(&state.db).await?;

    Ok(Json(UserInfo::from_models(user, profile)))
}

/// Current user, profile-centric view (same payload as `me`)
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<UserInfo>> {
    let (user, profile) = load_user_with_profile(&state, claims.sub).await?;
    Ok(Json(UserInfo::from_models(user, profile)))
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub bio: Option<String>,
    pub passport_id: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub preferred_pod_type: Option<PodType>,
    pub avatar_url: Option<String>,
}

/// Partial update of the extended profile. The credits balance and
/// timestamps are server-controlled and cannot be set here.
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<UserInfo>> {
    let (user, profile) = load_user_with_profile(&state, claims.sub).await?;

    let mut active: profile::ActiveModel = profile.into();
    if let Some(bio) = payload.bio {
        active.bio = Set(bio);
    }
    if let Some(passport_id) = payload.passport_id {
        active.passport_id = Set(passport_id);
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(phone);
    }
    if let Some(date_of_birth) = payload.date_of_birth {
        active.date_of_birth = Set(Some(date_of_birth));
    }
    if let Some(preferred_pod_type) = payload.preferred_pod_type {
        active.preferred_pod_type = Set(preferred_pod_type);
    }
    if let Some(avatar_url) = payload.avatar_url {
        active.avatar_url = Set(Some(avatar_url));
    }
    active.updated_at = Set(Utc::now().into());
    let profile = active.update(&state.db).await?;

    Ok(Json(UserInfo::from_models(user, profile)))
}
