//! HTTP request handlers.

pub mod auth_handler;
pub mod barcode_handler;
pub mod training_handler;
pub mod upload_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use barcode_handler::barcode_routes;
pub use training_handler::training_routes;
pub use upload_handler::upload_routes;
pub use user_handler::user_routes;
