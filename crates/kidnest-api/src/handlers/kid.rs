//! Kid profile CRUD handlers. All routes are parent-only; the router layers
//! authentication and role guarding in front of them.

use axum::{Extension, Json};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use kidnest_core::error::AppError;
use kidnest_service::kid::CreateKidInput;

use crate::dto::request::{CreateKidRequest, UpdateKidRequest, validation_message};
use crate::dto::response::{ApiResponse, KidResponse};
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// POST /api/kids
pub async fn create(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<CreateKidRequest>,
) -> Result<(StatusCode, Json<ApiResponse<KidResponse>>), ApiError> {
    if let Err(errors) = req.validate() {
        return Err(AppError::validation(validation_message(&errors)).into());
    }

    let input = CreateKidInput {
        name: req.name,
        age: req.age,
        avatar: req.avatar,
        interests: req.interests.unwrap_or_default(),
    };

    let kid = state.kid_service.create(current.0.id, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(KidResponse::from(kid))),
    ))
}

/// GET /api/kids
pub async fn list(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<Vec<KidResponse>>>, ApiError> {
    let kids = state.kid_service.list(current.0.id).await?;
    let kids = kids.into_iter().map(KidResponse::from).collect();
    Ok(Json(ApiResponse::ok(kids)))
}

/// GET /api/kids/{id}
pub async fn get(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(kid_id): Path<Uuid>,
) -> Result<Json<ApiResponse<KidResponse>>, ApiError> {
    let kid = state.kid_service.get(current.0.id, kid_id).await?;
    Ok(Json(ApiResponse::ok(KidResponse::from(kid))))
}

/// PUT /api/kids/{id}
pub async fn update(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(kid_id): Path<Uuid>,
    Json(req): Json<UpdateKidRequest>,
) -> Result<Json<ApiResponse<KidResponse>>, ApiError> {
    if let Err(errors) = req.validate() {
        return Err(AppError::validation(validation_message(&errors)).into());
    }

    let kid = state
        .kid_service
        .update(current.0.id, kid_id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(KidResponse::from(kid))))
}

/// DELETE /api/kids/{id}
pub async fn delete(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(kid_id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.kid_service.delete(current.0.id, kid_id).await?;
    Ok(Json(ApiResponse::message("Kid profile deleted")))
}
