//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_BARCODE_API_URL, DEFAULT_CLIENT_DIR, DEFAULT_DATA_DIR, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, TRAININGS_FILE_NAME, USERS_FILE_NAME,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Directory holding `users.json` and `trainings.json`
    pub data_dir: PathBuf,
    /// Root for uploaded videos and images
    pub upload_dir: PathBuf,
    /// Static web client served at `/`
    pub client_dir: PathBuf,
    pub barcode_api_url: String,
    barcode_api_key: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("data_dir", &self.data_dir)
            .field("upload_dir", &self.upload_dir)
            .field("client_dir", &self.client_dir)
            .field("barcode_api_url", &self.barcode_api_url)
            .field(
                "barcode_api_key",
                &self.barcode_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("uploads"));

        // PORT wins over SERVER_PORT for compatibility with hosting platforms
        let server_port = env::var("PORT")
            .or_else(|_| env::var("SERVER_PORT"))
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);

        let barcode_api_key = env::var("SEARCHUPCDATA_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        if barcode_api_key.is_none() {
            tracing::warn!("SEARCHUPCDATA_API_KEY not set, barcode lookup is disabled");
        }

        Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port,
            data_dir,
            upload_dir,
            client_dir: env::var("CLIENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CLIENT_DIR)),
            barcode_api_url: env::var("BARCODE_API_URL")
                .unwrap_or_else(|_| DEFAULT_BARCODE_API_URL.to_string()),
            barcode_api_key,
        }
    }

    /// Configuration rooted at `data_dir`, with no barcode key. Used by tests and tools.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            upload_dir: data_dir.join("uploads"),
            client_dir: data_dir.join("client"),
            data_dir,
            barcode_api_url: DEFAULT_BARCODE_API_URL.to_string(),
            barcode_api_key: None,
        }
    }

    /// Barcode API key, if configured.
    pub fn barcode_api_key(&self) -> Option<&str> {
        self.barcode_api_key.as_deref()
    }

    /// Path of the user store file.
    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join(USERS_FILE_NAME)
    }

    /// Path of the training store file.
    pub fn trainings_file(&self) -> PathBuf {
        self.data_dir.join(TRAININGS_FILE_NAME)
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
