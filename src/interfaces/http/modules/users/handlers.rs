//! Worker administration API handlers
//!
//! Thin wrappers that delegate to `WorkerService` and forward every failure
//! to the centralized `ApiError` responder.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use tracing::debug;

use super::dto::{
    CreateWorkerRequest, ListWorkersParams, UpdateUserRequest, WorkerDto, WorkersResponse,
};
use crate::application::workers::WorkerService;
use crate::config::PaginationConfig;
use crate::domain::{DomainError, UserRepositoryInterface};
use crate::interfaces::http::common::{ApiError, ApiJson, DeletedResponse, MessageResponse};
use crate::shared::validate_pagination;

/// User handler state
#[derive(Clone)]
pub struct UserHandlerState {
    pub worker_service: Arc<WorkerService<dyn UserRepositoryInterface>>,
    pub pagination: PaginationConfig,
}

/// Ids that are not integers cannot match any row.
fn parse_user_id(raw: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| DomainError::user_not_found(raw).into())
}

#[utoipa::path(
    post,
    path = "/api/v1/workers",
    tag = "Workers",
    request_body = CreateWorkerRequest,
    responses(
        (status = 200, description = "Worker created", body = MessageResponse),
        (status = 400, description = "A user with this phone already exists", body = MessageResponse)
    )
)]
pub async fn create_worker(
    State(state): State<UserHandlerState>,
    ApiJson(request): ApiJson<CreateWorkerRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.worker_service.create_worker(request.into()).await?;

    Ok(Json(MessageResponse::success("Worker added successfully")))
}

#[utoipa::path(
    patch,
    path = "/api/v1/users/{user_id}",
    tag = "Users",
    params(("user_id" = String, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Phone already used by another user", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse)
    )
)]
pub async fn edit_user(
    State(state): State<UserHandlerState>,
    Path(user_id): Path<String>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_user_id(&user_id)?;

    state.worker_service.edit_user(id, request.into()).await?;

    Ok(Json(MessageResponse::success("User updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/v1/workers/{user_id}",
    tag = "Workers",
    params(("user_id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "Worker deleted", body = DeletedResponse),
        (status = 403, description = "Admin accounts cannot be deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse)
    )
)]
pub async fn delete_worker(
    State(state): State<UserHandlerState>,
    Path(user_id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = parse_user_id(&user_id)?;

    let deleted_id = state.worker_service.delete_worker(id).await?;

    Ok(Json(DeletedResponse {
        success: true,
        message: "Worker deleted successfully".to_string(),
        id: deleted_id,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/workers",
    tag = "Workers",
    params(ListWorkersParams),
    responses(
        (status = 200, description = "One page of workers, ordered by id", body = WorkersResponse)
    )
)]
pub async fn fetch_workers(
    State(state): State<UserHandlerState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<WorkersResponse>, ApiError> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(e) => {
            debug!("Unreadable query string, using default pagination: {}", e.body_text());
            Vec::new()
        }
    };
    let params = ListWorkersParams::from_pairs(pairs);

    let page = validate_pagination(
        params.page.as_deref(),
        params.page_size.as_deref(),
        state.pagination.default_page_size,
        state.pagination.max_page_size,
    );

    let workers = state.worker_service.fetch_workers(page).await?;

    Ok(Json(WorkersResponse {
        success: true,
        workers: workers.into_iter().map(WorkerDto::from).collect(),
    }))
}
