//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{delete, get, patch},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{DeletedResponse, MessageResponse};
use super::modules::{health, metrics, request_id, users};
use crate::application::workers::WorkerService;
use crate::config::PaginationConfig;
use crate::domain::UserRepositoryInterface;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::create_worker,
        users::fetch_workers,
        users::delete_worker,
        users::edit_user,
    ),
    components(
        schemas(
            MessageResponse,
            DeletedResponse,
            health::HealthResponse,
            health::ComponentHealth,
            users::CreateWorkerRequest,
            users::UpdateUserRequest,
            users::WorkerDto,
            users::WorkersResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Workers", description = "Create, list and delete worker accounts"),
        (name = "Users", description = "Edit any user's profile fields"),
    ),
    info(
        title = "Worker Administration API",
        version = "1.0.0",
        description = "REST API for managing worker accounts",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// `/metrics` is only mounted when a Prometheus handle is supplied.
pub fn create_api_router(
    user_repository: Arc<dyn UserRepositoryInterface>,
    db: DatabaseConnection,
    pagination: PaginationConfig,
    prometheus_handle: Option<PrometheusHandle>,
) -> Router {
    let user_state = users::UserHandlerState {
        worker_service: Arc::new(WorkerService::new(user_repository)),
        pagination,
    };

    let worker_routes = Router::new()
        .route("/", get(users::fetch_workers).post(users::create_worker))
        .route("/{user_id}", delete(users::delete_worker))
        .with_state(user_state.clone());

    let user_routes = Router::new()
        .route(
            "/{user_id}",
            patch(users::edit_user).put(users::edit_user),
        )
        .with_state(user_state);

    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::health_check).with_state(health_state))
        .nest("/api/v1/workers", worker_routes)
        .nest("/api/v1/users", user_routes);

    if let Some(handle) = prometheus_handle {
        router = router.route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(metrics::MetricsState { handle }),
        );
    }

    router
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id::request_id_middleware))
}
