//! User profile and inventory handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::{normalize, ValidatedJson, ValidatedQuery};
use crate::api::AppState;
use crate::domain::{InventoryItem, UserInventory, UserResponse};
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Identifies the requesting user by email
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    /// Account email
    #[serde(default, deserialize_with = "normalize::email")]
    #[validate(length(min = 1, message = "email required"))]
    pub email: String,
}

/// Replace a user's inventory lists
///
/// Each list is optional; an omitted list is left as stored. Items may be
/// objects or bare name strings.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateInventoryRequest {
    #[serde(default, deserialize_with = "normalize::email")]
    #[validate(length(min = 1, message = "email required"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[serde(default)]
    pub inventory: Option<Vec<InventoryItem>>,
    #[serde(default)]
    pub deleted_inventory: Option<Vec<InventoryItem>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserDetailBody {
    pub user: UserResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InventoriesBody {
    pub inventories: Vec<UserInventory>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(get_user).post(update_inventory))
        .route("/inventories", get(list_inventories))
}

/// Get a user's profile and inventories
#[utoipa::path(
    get,
    path = "/api/user",
    tag = "Users",
    params(EmailQuery),
    responses(
        (status = 200, description = "User found", body = UserDetailBody),
        (status = 400, description = "Missing email"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<EmailQuery>,
) -> AppResult<Json<ApiResponse<UserDetailBody>>> {
    let user = state.user_service.get_user(query.email).await?;

    Ok(Json(ApiResponse::success(UserDetailBody {
        user: UserResponse::from(user),
    })))
}

/// Replace inventory and/or deleted inventory
#[utoipa::path(
    post,
    path = "/api/user",
    tag = "Users",
    request_body = UpdateInventoryRequest,
    responses(
        (status = 200, description = "Inventory saved"),
        (status = 400, description = "Missing email or inventory too large"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_inventory(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateInventoryRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .user_service
        .update_inventory(payload.email, payload.inventory, payload.deleted_inventory)
        .await?;

    Ok(Json(ApiResponse::ack()))
}

/// List every user's active inventory
#[utoipa::path(
    get,
    path = "/api/inventories",
    tag = "Users",
    responses(
        (status = 200, description = "All inventories", body = InventoriesBody)
    )
)]
pub async fn list_inventories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<InventoriesBody>>> {
    let inventories = state.user_service.list_inventories().await?;

    Ok(Json(ApiResponse::success(InventoriesBody { inventories })))
}
