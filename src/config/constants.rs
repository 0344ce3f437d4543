//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Storage
// =============================================================================

/// Default directory holding the JSON store files
pub const DEFAULT_DATA_DIR: &str = ".";

/// File name of the user store inside the data directory
pub const USERS_FILE_NAME: &str = "users.json";

/// File name of the training store inside the data directory
pub const TRAININGS_FILE_NAME: &str = "trainings.json";

/// Default location of the static web client
pub const DEFAULT_CLIENT_DIR: &str = "../client";

// =============================================================================
// Uploads
// =============================================================================

/// Sub-directory (under the upload dir) for videos
pub const VIDEO_UPLOAD_SUBDIR: &str = "videos";

/// Sub-directory (under the upload dir) for images
pub const IMAGE_UPLOAD_SUBDIR: &str = "images";

/// Public URL prefix for uploaded videos
pub const VIDEO_URL_PREFIX: &str = "/uploads/videos";

/// Public URL prefix for uploaded images
pub const IMAGE_URL_PREFIX: &str = "/uploads/images";

/// Maximum video upload size (50 MiB)
pub const MAX_VIDEO_UPLOAD_BYTES: usize = 50 << 20;

/// Maximum image upload size (10 MiB)
pub const MAX_IMAGE_UPLOAD_BYTES: usize = 10 << 20;

/// Accepted image content types
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Check if an uploaded image content type is accepted
pub fn is_allowed_image_type(content_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&content_type)
}

// =============================================================================
// Barcode lookup
// =============================================================================

/// Default SearchUPCData API base URL
pub const DEFAULT_BARCODE_API_URL: &str = "https://searchupcdata.com/api";

/// Barcode API request timeout in seconds
pub const BARCODE_API_TIMEOUT_SECONDS: u64 = 10;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 6;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Maximum number of entries in an inventory (and in the deleted inventory)
pub const MAX_INVENTORY_ITEMS: usize = 1000;
