//! Common HTTP response types

use serde::Serialize;
use utoipa::ToSchema;

/// Client-visible error body.
///
/// The message is a stable contract string; internal error detail stays in
/// the server log and is never included here.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
