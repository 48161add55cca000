use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::error::{AppError, AppResult};
use crate::utils::jwt::{verify_token, TokenKind};
use crate::AppState;

/// Extract and validate the JWT access token from the Authorization header
pub async fn auth_middleware(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let TypedHeader(auth) = auth.ok_or_else(|| {
        AppError::Unauthorized("Missing authorization header".to_string())
    })?;
    let claims = verify_token(auth.token(), &state.config.jwt_secret)?;

    // Refresh tokens are only good for the refresh endpoint
    if claims.token_kind != TokenKind::Access {
        return Err(AppError::Unauthorized(
            "Access token required".to_string(),
        ));
    }

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
