//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{normalize, ValidatedJson};
use crate::api::AppState;
use crate::domain::UserSummary;
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created};

/// Account creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    /// Display name
    #[serde(default, deserialize_with = "normalize::trimmed")]
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// Email address (case-insensitive)
    #[serde(default, deserialize_with = "normalize::email")]
    #[validate(email(message = "invalid email format"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
    /// Password, 6-128 characters
    #[serde(default, deserialize_with = "normalize::trimmed")]
    #[validate(length(min = 6, max = 128, message = "password must be 6-128 characters"))]
    #[schema(example = "hunter22", min_length = 6)]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "normalize::email")]
    #[validate(length(min = 1, message = "email and password required"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[serde(default, deserialize_with = "normalize::trimmed")]
    #[validate(length(min = 1, message = "email and password required"))]
    #[schema(example = "hunter22")]
    pub password: String,
}

/// `{"ok": true, "user": {...}}` after signup or login
#[derive(Debug, Serialize, ToSchema)]
pub struct UserBody {
    pub user: UserSummary,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

/// Create a new account
#[utoipa::path(
    post,
    path = "/api/signup",
    tag = "Authentication",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = UserBody),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Account already exists")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignupRequest>,
) -> AppResult<Created<UserBody>> {
    let user = state
        .auth_service
        .register(payload.name, payload.email, payload.password)
        .await?;

    Ok(Created(UserBody {
        user: UserSummary::from(&user),
    }))
}

/// Check credentials
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = UserBody),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<UserBody>>> {
    let user = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(ApiResponse::success(UserBody {
        user: UserSummary::from(&user),
    })))
}
