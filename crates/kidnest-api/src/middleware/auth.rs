//! Bearer-token authentication middleware.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use kidnest_core::error::AppError;
use kidnest_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user, inserted into request extensions by [`authenticate`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Verifies the `Authorization: Bearer <token>` header, loads the account it
/// names, and makes it available to downstream handlers.
///
/// Rejections are deliberately specific so clients can tell a missing header
/// from a malformed one and an expired token from a forged one.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| AppError::authentication("Not authorized, no token"))?;

    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::authentication("Invalid authorization header"))?;

    let claims = state.token_decoder.verify(token)?;

    // The account may have been deleted since the token was issued.
    let user = state
        .user_repo
        .find_by_id(claims.user_id())
        .await?
        .ok_or_else(|| AppError::authentication("User not found"))?;

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}
