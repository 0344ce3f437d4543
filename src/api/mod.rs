//! API layer - HTTP handlers, extractors and route definitions
//!
//! Every JSON endpoint lives under `/api`; uploaded media and the client
//! bundle are served as static files next to it.

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
