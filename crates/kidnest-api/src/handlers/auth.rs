//! Auth handlers: signup, login, me, logout.

use axum::{Extension, Json};
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{ApiResponse, MinimalProfile, Profile};
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// POST /api/auth/signup
///
/// Registers a parent or kid account and returns a bearer token alongside
/// the role-shaped profile.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Profile>>), ApiError> {
    let outcome = state.auth_service.signup(req.into()).await?;

    let profile = Profile::signup(&outcome.user, outcome.kid_profile.as_ref());
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_token(outcome.token, profile)),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<MinimalProfile>>, ApiError> {
    let outcome = state.auth_service.login(req.email, req.password).await?;

    Ok(Json(ApiResponse::with_token(
        outcome.token,
        MinimalProfile::from(&outcome.user),
    )))
}

/// GET /api/auth/me
///
/// Re-fetches the account so the response reflects the current state rather
/// than the snapshot taken by the auth middleware.
pub async fn me(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<Profile>>, ApiError> {
    let user = state.auth_service.current_user(current.0.id).await?;

    Ok(Json(ApiResponse::ok(Profile::me(&user))))
}

/// POST /api/auth/logout
///
/// Tokens are stateless, so logout is an acknowledgement; clients discard
/// the token on their side.
pub async fn logout() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("Logged out successfully"))
}
