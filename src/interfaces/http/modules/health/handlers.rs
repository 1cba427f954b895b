//! Health check handler

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up")
    )
)]
pub async fn health_check() -> &'static str {
    "OK"
}
