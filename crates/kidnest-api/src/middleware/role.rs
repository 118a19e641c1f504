//! Role-based route guarding.

use std::future::Future;
use std::pin::Pin;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use kidnest_core::error::AppError;
use kidnest_entity::user::UserRole;

use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;

/// Role set for parent-only routes.
pub const PARENT_ONLY: &[UserRole] = &[UserRole::Parent];

/// Builds a middleware that rejects authenticated users whose role is not in
/// `allowed`. Must run after [`super::authenticate`].
pub fn require_role(
    allowed: &'static [UserRole],
) -> impl Fn(Request, Next) -> Pin<Box<dyn Future<Output = Result<Response, ApiError>> + Send>> + Clone
{
    move |request: Request, next: Next| {
        Box::pin(async move {
            let current = request
                .extensions()
                .get::<CurrentUser>()
                .ok_or_else(|| AppError::authentication("Not authenticated"))?;

            if !allowed.contains(&current.0.role) {
                return Err(ApiError(AppError::authorization("Access denied")));
            }

            Ok(next.run(request).await)
        })
    }
}
