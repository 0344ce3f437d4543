//! Upload service - Stores training videos and thumbnail images on disk.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::config::{
    is_allowed_image_type, IMAGE_UPLOAD_SUBDIR, IMAGE_URL_PREFIX, VIDEO_UPLOAD_SUBDIR,
    VIDEO_URL_PREFIX,
};
use crate::errors::{AppError, AppResult};

/// A file received from a multipart form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Upload service trait for dependency injection.
#[async_trait]
pub trait UploadService: Send + Sync {
    /// Store a `video/*` file and return its public URL
    async fn save_video(&self, file: UploadedFile) -> AppResult<String>;

    /// Store a JPEG/PNG/GIF/WebP image and return its public URL
    async fn save_image(&self, file: UploadedFile) -> AppResult<String>;
}

/// Stores uploads under `<upload_dir>/videos` and `<upload_dir>/images`.
pub struct LocalUploads {
    video_dir: PathBuf,
    image_dir: PathBuf,
}

impl LocalUploads {
    /// Create the upload directories if needed.
    pub fn new(upload_dir: &Path) -> AppResult<Self> {
        let video_dir = upload_dir.join(VIDEO_UPLOAD_SUBDIR);
        let image_dir = upload_dir.join(IMAGE_UPLOAD_SUBDIR);

        for dir in [&video_dir, &image_dir] {
            std::fs::create_dir_all(dir).map_err(|e| {
                AppError::internal(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }

        Ok(Self {
            video_dir,
            image_dir,
        })
    }

    async fn write(&self, dir: &Path, url_prefix: &str, file: UploadedFile) -> AppResult<String> {
        let stored_name = format!("{}_{}", Uuid::new_v4(), sanitize_file_name(&file.file_name));
        let target = dir.join(&stored_name);

        tokio::fs::write(&target, &file.data).await.map_err(|e| {
            AppError::internal(format!("Failed to save {}: {}", target.display(), e))
        })?;

        tracing::info!(file = %stored_name, bytes = file.data.len(), "Upload stored");
        Ok(format!("{}/{}", url_prefix, stored_name))
    }
}

#[async_trait]
impl UploadService for LocalUploads {
    async fn save_video(&self, file: UploadedFile) -> AppResult<String> {
        if !file.content_type.starts_with("video/") {
            return Err(AppError::validation("file must be a video"));
        }
        self.write(&self.video_dir, VIDEO_URL_PREFIX, file).await
    }

    async fn save_image(&self, file: UploadedFile) -> AppResult<String> {
        if !is_allowed_image_type(&file.content_type) {
            return Err(AppError::validation(
                "file must be an image (JPEG, PNG, GIF, or WebP)",
            ));
        }
        self.write(&self.image_dir, IMAGE_URL_PREFIX, file).await
    }
}

/// Keep only the final path component and replace anything outside
/// `[A-Za-z0-9._-]`.
fn sanitize_file_name(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}
