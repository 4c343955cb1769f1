//! Data behind the shop and beneficiary dashboards

use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::AppState;
use crate::model::{Beneficiary, ItemType, Shop, ShopStatus, StockStatus};
use crate::store::RecordStore;

use super::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    quantity: u32,
    unit: &'static str,
}

/// One stock card on a dashboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    item_type: ItemType,
    quantity: u32,
    unit: &'static str,
    status: StockStatus,
    label: &'static str,
    /// None when the shop has never recorded this item
    last_updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monthly_allocation: Option<Allocation>,
}

/// Builds a card for every item type; missing rows count as empty.
fn item_views(store: &RecordStore, shop_id: &str, with_allocation: bool) -> Vec<ItemView> {
    ItemType::ALL
        .into_iter()
        .map(|item_type| {
            let row = store.stock_by_shop_and_item(shop_id, item_type);
            let quantity = row.as_ref().map_or(0, |r| r.quantity);
            let status = StockStatus::classify(item_type, quantity);
            ItemView {
                item_type,
                quantity,
                unit: item_type.unit(),
                status,
                label: status.label(),
                last_updated: row.map(|r| r.last_updated),
                monthly_allocation: with_allocation.then(|| Allocation {
                    quantity: item_type.monthly_allocation(),
                    unit: item_type.unit(),
                }),
            }
        })
        .collect()
}

fn rollup(items: &[ItemView]) -> ShopStatus {
    ShopStatus::from_statuses(items.iter().map(|i| i.status))
}

#[derive(Debug, Serialize)]
pub struct ShopDashboard {
    shop: Option<Shop>,
    status: ShopStatus,
    items: Vec<ItemView>,
}

pub async fn shop_dashboard(
    State(state): State<AppState>,
    Path(shop_id): Path<String>,
) -> Json<ShopDashboard> {
    let items = item_views(&state.store, &shop_id, false);

    Json(ShopDashboard {
        shop: state.store.get_shop(&shop_id),
        status: rollup(&items),
        items,
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryDashboard {
    beneficiary: Beneficiary,
    assigned_shop: Option<Shop>,
    status: ShopStatus,
    items: Vec<ItemView>,
}

pub async fn beneficiary_dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<BeneficiaryDashboard>, AppError> {
    let beneficiary = state
        .store
        .beneficiary_by_user_id(&user_id)
        .ok_or_else(|| AppError::NotFound("Beneficiary not found".to_string()))?;

    let items = item_views(&state.store, &beneficiary.shop_id, true);

    Ok(Json(BeneficiaryDashboard {
        assigned_shop: state.store.get_shop(&beneficiary.shop_id),
        status: rollup(&items),
        items,
        beneficiary,
    }))
}
