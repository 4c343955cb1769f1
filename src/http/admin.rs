//! Administrator endpoints: shop overview, statistics and shop creation

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::model::{ItemType, NewShop, Shop, ShopStatus, Stock};

use super::error::AppError;
use super::extract::json_object;

/// Registered beneficiaries figure shown on the admin dashboard
const BENEFICIARY_COUNT: u32 = 1245;
/// Distribution rate percentage shown on the admin dashboard
const DISTRIBUTION_RATE: u32 = 94;

#[derive(Debug, Serialize)]
pub struct ShopWithStock {
    #[serde(flatten)]
    shop: Shop,
    status: ShopStatus,
    stock: IndexMap<ItemType, Stock>,
}

pub async fn list_shops(State(state): State<AppState>) -> Json<Vec<ShopWithStock>> {
    let shops = state
        .store
        .all_shops()
        .into_iter()
        .map(|shop| {
            let stock: IndexMap<ItemType, Stock> = state
                .store
                .stock_by_shop(&shop.id)
                .into_iter()
                .map(|row| (row.item_type, row))
                .collect();
            let status = ShopStatus::from_statuses(stock.values().map(Stock::status));
            ShopWithStock {
                shop,
                status,
                stock,
            }
        })
        .collect();

    Json(shops)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    total_shops: usize,
    beneficiaries: u32,
    low_stock_alerts: usize,
    out_of_stock_items: usize,
    distribution_rate: u32,
}

pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let all_stock = state.store.all_stock();

    let low_stock_alerts = all_stock.iter().filter(|s| s.status().is_alert()).count();
    let out_of_stock_items = all_stock.iter().filter(|s| s.quantity == 0).count();

    Json(StatsResponse {
        total_shops: state.store.all_shops().len(),
        beneficiaries: BENEFICIARY_COUNT,
        low_stock_alerts,
        out_of_stock_items,
        distribution_rate: DISTRIBUTION_RATE,
    })
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShopRequest {
    #[validate(length(min = 1))]
    name: String,
    #[validate(length(min = 1))]
    address: String,
    #[serde(default)]
    contact_number: Option<String>,
}

pub async fn create_shop(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Shop>), AppError> {
    const INVALID: &str = "Invalid shop data";
    let req: CreateShopRequest = json_object(payload, INVALID)?;
    req.validate()
        .map_err(|_| AppError::BadRequest(INVALID.to_string()))?;

    let shop = state.store.create_shop(NewShop {
        name: req.name,
        address: req.address,
        contact_number: req.contact_number,
    });
    info!(shop_id = %shop.id, name = %shop.name, "Shop created");

    Ok((StatusCode::CREATED, Json(shop)))
}
