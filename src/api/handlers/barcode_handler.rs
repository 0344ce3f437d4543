//! Barcode lookup handler.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::{normalize, ValidatedQuery};
use crate::api::AppState;
use crate::errors::AppResult;
use crate::infra::barcode_client::validate_upc;
use crate::infra::BarcodeProduct;
use crate::types::ApiResponse;

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BarcodeQuery {
    /// UPC or EAN printed under the barcode
    #[serde(default, deserialize_with = "normalize::trimmed")]
    #[validate(length(min = 1, message = "upc required"))]
    pub upc: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductBody {
    pub product: BarcodeProduct,
}

pub fn barcode_routes() -> Router<AppState> {
    Router::new().route("/barcode-lookup", get(lookup_barcode))
}

/// Look up product details for a barcode
#[utoipa::path(
    get,
    path = "/api/barcode-lookup",
    tag = "Inventory",
    params(BarcodeQuery),
    responses(
        (status = 200, description = "Product found", body = ProductBody),
        (status = 400, description = "Malformed UPC"),
        (status = 404, description = "Unknown barcode"),
        (status = 502, description = "Lookup service unavailable")
    )
)]
pub async fn lookup_barcode(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<BarcodeQuery>,
) -> AppResult<Json<ApiResponse<ProductBody>>> {
    let upc = validate_upc(&query.upc)?;
    let product = state.barcode_client.lookup(upc).await?;

    Ok(Json(ApiResponse::success(ProductBody { product })))
}
