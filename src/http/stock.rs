//! Stock read and update endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::info;

use crate::app::AppState;
use crate::model::{ItemType, Stock};

use super::error::AppError;
use super::extract::json_object;

/// Partial stock update. Item types not present are left alone and unknown
/// keys are ignored. A present key must carry a quantity, null is rejected.
#[derive(Debug, Default, Deserialize)]
pub struct StockUpdateRequest {
    #[serde(default, deserialize_with = "present_quantity")]
    rice: Option<u32>,
    #[serde(default, deserialize_with = "present_quantity")]
    wheat: Option<u32>,
    #[serde(default, deserialize_with = "present_quantity")]
    sugar: Option<u32>,
    #[serde(default, deserialize_with = "present_quantity")]
    kerosene: Option<u32>,
}

fn present_quantity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    u32::deserialize(deserializer).map(Some)
}

impl StockUpdateRequest {
    fn quantity(&self, item_type: ItemType) -> Option<u32> {
        match item_type {
            ItemType::Rice => self.rice,
            ItemType::Wheat => self.wheat,
            ItemType::Sugar => self.sugar,
            ItemType::Kerosene => self.kerosene,
        }
    }

    /// Requested quantities in item order
    fn entries(&self) -> impl Iterator<Item = (ItemType, u32)> + '_ {
        ItemType::ALL
            .into_iter()
            .filter_map(|item| self.quantity(item).map(|qty| (item, qty)))
    }
}

pub async fn get_stock(
    State(state): State<AppState>,
    Path(shop_id): Path<String>,
) -> Json<Vec<Stock>> {
    Json(state.store.stock_by_shop(&shop_id))
}

pub async fn update_stock(
    State(state): State<AppState>,
    Path(shop_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Vec<Stock>>, AppError> {
    let req: StockUpdateRequest = json_object(payload, "Invalid stock data")?;

    let updated: Vec<Stock> = req
        .entries()
        .map(|(item_type, quantity)| state.store.update_stock(&shop_id, item_type, quantity))
        .collect();

    let items: Vec<&str> = updated.iter().map(|row| row.item_type.as_str()).collect();
    info!(shop_id = %shop_id, items = ?items, "Stock updated");
    Ok(Json(updated))
}
