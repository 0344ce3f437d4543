//! Training handlers - Content modules and the recycle bin.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::user_handler::EmailQuery;
use crate::api::extractors::{normalize, ValidatedJson, ValidatedQuery};
use crate::api::AppState;
use crate::domain::{ContentBlock, NewTraining, Training, TrainingChanges};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created};

/// Training lookup by identifier
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrainingIdQuery {
    #[serde(default, deserialize_with = "normalize::trimmed")]
    #[validate(length(min = 1, message = "id required"))]
    pub id: String,
}

/// New training content
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTrainingRequest {
    #[serde(default, deserialize_with = "normalize::trimmed")]
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    #[schema(example = "Forklift safety")]
    pub title: String,
    #[serde(default, deserialize_with = "normalize::trimmed")]
    pub description: String,
    #[serde(default, deserialize_with = "normalize::non_blank")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

impl From<CreateTrainingRequest> for NewTraining {
    fn from(req: CreateTrainingRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            thumbnail_url: req.thumbnail_url,
            blocks: req.blocks,
        }
    }
}

/// Partial training update; blank text fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTrainingRequest {
    #[serde(default, deserialize_with = "normalize::trimmed")]
    #[validate(length(min = 1, message = "id required"))]
    pub id: String,
    #[serde(default, deserialize_with = "normalize::email")]
    #[validate(length(min = 1, message = "email required"))]
    pub email: String,
    #[serde(default, deserialize_with = "normalize::non_blank")]
    #[validate(length(max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "normalize::non_blank")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "normalize::non_blank")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub blocks: Option<Vec<ContentBlock>>,
}

impl UpdateTrainingRequest {
    fn into_parts(self) -> (String, String, TrainingChanges) {
        let changes = TrainingChanges {
            title: self.title,
            description: self.description,
            thumbnail_url: self.thumbnail_url,
            blocks: self.blocks,
        };
        (self.id, self.email, changes)
    }
}

/// Delete, restore or purge one of the caller's trainings
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TrainingActionRequest {
    #[serde(default, deserialize_with = "normalize::trimmed")]
    #[validate(length(min = 1, message = "id required"))]
    pub id: String,
    #[serde(default, deserialize_with = "normalize::email")]
    #[validate(length(min = 1, message = "email required"))]
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TrainingBody {
    pub training: Training,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TrainingsBody {
    pub trainings: Vec<Training>,
}

/// Create training routes
pub fn training_routes() -> Router<AppState> {
    Router::new()
        .route("/trainings", get(list_trainings).post(create_training))
        .route("/trainings/deleted", get(list_deleted_trainings))
        .route("/training", get(get_training))
        .route("/training/update", post(update_training))
        .route("/training/delete", post(delete_training))
        .route("/training/restore", post(restore_training))
        .route("/training/permanent-delete", post(permanently_delete_training))
}

/// List active trainings, newest first
#[utoipa::path(
    get,
    path = "/api/trainings",
    tag = "Trainings",
    responses(
        (status = 200, description = "Active trainings", body = TrainingsBody)
    )
)]
pub async fn list_trainings(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<TrainingsBody>>> {
    let trainings = state.training_service.list_active().await?;

    Ok(Json(ApiResponse::success(TrainingsBody { trainings })))
}

/// Create a training owned by `email`
#[utoipa::path(
    post,
    path = "/api/trainings",
    tag = "Trainings",
    params(EmailQuery),
    request_body = CreateTrainingRequest,
    responses(
        (status = 201, description = "Training created", body = TrainingBody),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_training(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<EmailQuery>,
    ValidatedJson(payload): ValidatedJson<CreateTrainingRequest>,
) -> AppResult<Created<TrainingBody>> {
    let training = state
        .training_service
        .create(query.email, payload.into())
        .await?;

    Ok(Created(TrainingBody { training }))
}

/// List the caller's recycle bin, most recently deleted first
#[utoipa::path(
    get,
    path = "/api/trainings/deleted",
    tag = "Trainings",
    params(EmailQuery),
    responses(
        (status = 200, description = "Trashed trainings", body = TrainingsBody),
        (status = 400, description = "Missing email")
    )
)]
pub async fn list_deleted_trainings(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<EmailQuery>,
) -> AppResult<Json<ApiResponse<TrainingsBody>>> {
    let trainings = state.training_service.list_trashed(query.email).await?;

    Ok(Json(ApiResponse::success(TrainingsBody { trainings })))
}

/// Get a single training
#[utoipa::path(
    get,
    path = "/api/training",
    tag = "Trainings",
    params(TrainingIdQuery),
    responses(
        (status = 200, description = "Training found", body = TrainingBody),
        (status = 404, description = "Training not found")
    )
)]
pub async fn get_training(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<TrainingIdQuery>,
) -> AppResult<Json<ApiResponse<TrainingBody>>> {
    let training = state.training_service.get(query.id).await?;

    Ok(Json(ApiResponse::success(TrainingBody { training })))
}

/// Update one of the caller's trainings
#[utoipa::path(
    post,
    path = "/api/training/update",
    tag = "Trainings",
    request_body = UpdateTrainingRequest,
    responses(
        (status = 200, description = "Training updated", body = TrainingBody),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Training not found")
    )
)]
pub async fn update_training(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateTrainingRequest>,
) -> AppResult<Json<ApiResponse<TrainingBody>>> {
    let (id, email, changes) = payload.into_parts();
    let training = state.training_service.update(id, email, changes).await?;

    Ok(Json(ApiResponse::success(TrainingBody { training })))
}

/// Move a training to the recycle bin
#[utoipa::path(
    post,
    path = "/api/training/delete",
    tag = "Trainings",
    request_body = TrainingActionRequest,
    responses(
        (status = 200, description = "Training moved to the recycle bin"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Training not found")
    )
)]
pub async fn delete_training(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TrainingActionRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .training_service
        .soft_delete(payload.id, payload.email)
        .await?;

    Ok(Json(ApiResponse::ack()))
}

/// Bring a training back from the recycle bin
#[utoipa::path(
    post,
    path = "/api/training/restore",
    tag = "Trainings",
    request_body = TrainingActionRequest,
    responses(
        (status = 200, description = "Training restored"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Training not found")
    )
)]
pub async fn restore_training(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TrainingActionRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .training_service
        .restore(payload.id, payload.email)
        .await?;

    Ok(Json(ApiResponse::ack()))
}

/// Remove a training for good
#[utoipa::path(
    post,
    path = "/api/training/permanent-delete",
    tag = "Trainings",
    request_body = TrainingActionRequest,
    responses(
        (status = 200, description = "Training removed"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Training not found")
    )
)]
pub async fn permanently_delete_training(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TrainingActionRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .training_service
        .permanently_delete(payload.id, payload.email)
        .await?;

    Ok(Json(ApiResponse::ack()))
}
