//! Subject API handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{ListSubjectsParams, SubjectListResponse};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ErrorBody;

/// Subject handler state
#[derive(Clone)]
pub struct SubjectAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/subjects",
    tag = "Subjects",
    params(
        ("search" = Option<String>, Query, description = "Substring match on subject name or code, case-insensitive"),
        ("department" = Option<String>, Query, description = "Substring match on department name, case-insensitive"),
        ("page" = Option<String>, Query, description = "Page number, 1-based. Default 1"),
        ("limit" = Option<String>, Query, description = "Page size. Default 10"),
    ),
    responses(
        (status = 200, description = "Paginated subject list", body = SubjectListResponse),
        (status = 400, description = "Malformed page or limit", body = ErrorBody),
        (status = 500, description = "Store access failed", body = ErrorBody)
    )
)]
pub async fn list_subjects(
    State(state): State<SubjectAppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SubjectListResponse>, (StatusCode, Json<ErrorBody>)> {
    let query = match ListSubjectsParams::from_pairs(pairs).into_query() {
        Ok(query) => query,
        Err(_) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::new("Invalid pagination parameters")),
            ));
        }
    };

    match state.repos.subjects().list(&query).await {
        Ok(result) => Ok(Json(SubjectListResponse::from_result(result))),
        Err(e) => {
            tracing::error!(
                method = "GET",
                path = "/api/subjects",
                error = %e,
                "Failed to get subjects"
            );
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("Failed to get subjects")),
            ))
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
