//! Media upload handlers.

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    response::Json,
    routing::post,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::{MAX_IMAGE_UPLOAD_BYTES, MAX_VIDEO_UPLOAD_BYTES};
use crate::errors::{AppError, AppResult};
use crate::services::UploadedFile;
use crate::types::ApiResponse;

/// Room for multipart boundaries and headers on top of the file itself
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(Debug, Serialize, ToSchema)]
pub struct VideoUploadBody {
    #[schema(example = "/uploads/videos/4f1c..._intro.mp4")]
    pub video_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ImageUploadBody {
    #[schema(example = "/uploads/images/9a2e..._cover.png")]
    pub image_url: String,
}

/// Create upload routes, each with its own body limit
pub fn upload_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/upload-video",
            post(upload_video)
                .layer(DefaultBodyLimit::max(MAX_VIDEO_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES)),
        )
        .route(
            "/upload-image",
            post(upload_image)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES)),
        )
}

/// Upload a training video (multipart field `video`)
#[utoipa::path(
    post,
    path = "/api/upload-video",
    tag = "Uploads",
    request_body(content_type = "multipart/form-data", description = "Field `video`, up to 50 MiB"),
    responses(
        (status = 200, description = "Video stored", body = VideoUploadBody),
        (status = 400, description = "Missing, oversized or non-video file")
    )
)]
pub async fn upload_video(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<ApiResponse<VideoUploadBody>>> {
    let file = read_file_field(multipart, "video", MAX_VIDEO_UPLOAD_BYTES).await?;
    let video_url = state.upload_service.save_video(file).await?;

    Ok(Json(ApiResponse::success(VideoUploadBody { video_url })))
}

/// Upload a thumbnail or content image (multipart field `image`)
#[utoipa::path(
    post,
    path = "/api/upload-image",
    tag = "Uploads",
    request_body(content_type = "multipart/form-data", description = "Field `image`, up to 10 MiB"),
    responses(
        (status = 200, description = "Image stored", body = ImageUploadBody),
        (status = 400, description = "Missing, oversized or unsupported image")
    )
)]
pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<ApiResponse<ImageUploadBody>>> {
    let file = read_file_field(multipart, "image", MAX_IMAGE_UPLOAD_BYTES).await?;
    let image_url = state.upload_service.save_image(file).await?;

    Ok(Json(ApiResponse::success(ImageUploadBody { image_url })))
}

/// Read the first part named `field_name`, skipping any others.
async fn read_file_field(
    mut multipart: Multipart,
    field_name: &str,
    max_bytes: usize,
) -> AppResult<UploadedFile> {
    while let Some(field) = multipart.next_field().await.map_err(invalid_upload)? {
        if field.name() != Some(field_name) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(invalid_upload)?;

        if data.len() > max_bytes {
            return Err(AppError::validation(format!(
                "file too large (max {} MiB)",
                max_bytes >> 20
            )));
        }

        return Ok(UploadedFile {
            file_name,
            content_type,
            data: data.to_vec(),
        });
    }

    Err(AppError::validation("no file uploaded"))
}

fn invalid_upload(err: axum::extract::multipart::MultipartError) -> AppError {
    tracing::debug!(error = %err, "Rejected multipart body");
    AppError::bad_request("file too large or invalid")
}
