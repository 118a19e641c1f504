//! Route definitions for the KidNest HTTP API.
//!
//! All routes are mounted under `/api`. Protected routes carry the
//! authentication middleware, and the kid CRUD routes additionally carry the
//! parent-only role guard. Layers run outermost-first, so authentication is
//! applied after (outside) the role guard.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::middleware::{PARENT_ONLY, authenticate, require_role};
use crate::state::AppState;

/// Builds the API router with all routes and their guards.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes(state.clone()))
        .merge(kid_routes(state.clone()))
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Auth endpoints: signup, login, logout, me.
fn auth_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout));

    let protected = Router::new()
        .route("/auth/me", get(handlers::auth::me))
        .layer(axum_middleware::from_fn_with_state(state, authenticate));

    public.merge(protected)
}

/// Kid profile CRUD, parent-only.
fn kid_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/kids", post(handlers::kid::create))
        .route("/kids", get(handlers::kid::list))
        .route("/kids/{id}", get(handlers::kid::get))
        .route("/kids/{id}", put(handlers::kid::update))
        .route("/kids/{id}", delete(handlers::kid::delete))
        .layer(axum_middleware::from_fn(require_role(PARENT_ONLY)))
        .layer(axum_middleware::from_fn_with_state(state, authenticate))
}

/// Health check endpoint, no auth required.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
