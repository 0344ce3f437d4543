use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Standard success envelope: `{"ok": true, ...payload fields}`.
///
/// The payload is flattened so each endpoint keeps its own top-level keys
/// (`user`, `trainings`, `video_url`, ...).
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Bare `{"ok": true}`
    pub fn ack() -> Self {
        Self { ok: true, data: None }
    }
}

/// Created response helper for POST endpoints that store a new record
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(ApiResponse::success(self.0))).into_response()
    }
}
