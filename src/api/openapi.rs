//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    auth_handler, barcode_handler, training_handler, upload_handler, user_handler,
};
use crate::api::routes;
use crate::domain::{
    BlockType, ContentBlock, InventoryItem, Training, UserInventory, UserResponse, UserSummary,
};
use crate::infra::BarcodeProduct;
use crate::services::StoreStats;

/// OpenAPI documentation for the TrainHub API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TrainHub API",
        version = "0.1.0",
        description = "Accounts, personal inventories and training modules backed by JSON document stores",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        routes::health,
        // Authentication endpoints
        auth_handler::signup,
        auth_handler::login,
        // User endpoints
        user_handler::get_user,
        user_handler::update_inventory,
        user_handler::list_inventories,
        // Training endpoints
        training_handler::list_trainings,
        training_handler::create_training,
        training_handler::list_deleted_trainings,
        training_handler::get_training,
        training_handler::update_training,
        training_handler::delete_training,
        training_handler::restore_training,
        training_handler::permanently_delete_training,
        // Media and lookup endpoints
        upload_handler::upload_video,
        upload_handler::upload_image,
        barcode_handler::lookup_barcode,
    ),
    components(
        schemas(
            // Domain types
            UserSummary,
            UserResponse,
            UserInventory,
            InventoryItem,
            Training,
            ContentBlock,
            BlockType,
            BarcodeProduct,
            StoreStats,
            // Request bodies
            auth_handler::SignupRequest,
            auth_handler::LoginRequest,
            user_handler::UpdateInventoryRequest,
            training_handler::CreateTrainingRequest,
            training_handler::UpdateTrainingRequest,
            training_handler::TrainingActionRequest,
            // Response payloads
            routes::HealthResponse,
            auth_handler::UserBody,
            user_handler::UserDetailBody,
            user_handler::InventoriesBody,
            training_handler::TrainingBody,
            training_handler::TrainingsBody,
            upload_handler::VideoUploadBody,
            upload_handler::ImageUploadBody,
            barcode_handler::ProductBody,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and store counts"),
        (name = "Authentication", description = "Account signup and login"),
        (name = "Users", description = "Profiles and inventories"),
        (name = "Trainings", description = "Training modules and the recycle bin"),
        (name = "Uploads", description = "Training media uploads"),
        (name = "Inventory", description = "Barcode product lookup")
    )
)]
pub struct ApiDoc;
