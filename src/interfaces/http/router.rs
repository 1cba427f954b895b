//! API Router with Swagger UI

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::RepositoryProvider;

use super::common::ErrorBody;
use super::modules::subjects::dto::{
    DepartmentDto, PaginationDto, SubjectDto, SubjectListResponse,
};
use super::modules::subjects::handlers::SubjectAppState;
use super::modules::{health, subjects};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::handlers::health_check,
        subjects::handlers::list_subjects,
    ),
    components(
        schemas(
            SubjectListResponse,
            SubjectDto,
            DepartmentDto,
            PaginationDto,
            ErrorBody,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Subjects", description = "Subject listing with search, department filter and pagination"),
    ),
    info(
        title = "Class Management API",
        version = "1.0.0",
        description = "REST API for browsing subjects and their departments",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

async fn root() -> &'static str {
    "Hello, welcome to class management API!"
}

/// Create the API router with all routes
pub fn create_api_router(repos: Arc<dyn RepositoryProvider>) -> Router {
    let subject_state = SubjectAppState { repos };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health::handlers::health_check))
        .route("/api/subjects", get(subjects::handlers::list_subjects))
        .with_state(subject_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
