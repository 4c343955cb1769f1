//! Stored record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::{ItemType, StockStatus};

/// Portal roles; each one gets its own dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Shop,
    Beneficiary,
    Admin,
}

impl Role {
    /// Client route the user lands on after login
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Shop => "/shop",
            Role::Beneficiary => "/beneficiary",
            Role::Admin => "/admin",
        }
    }
}

/// Portal account. The password is kept in plaintext and never serialized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
    pub name: String,
    pub shop_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    pub shop_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: String,
    pub name: String,
    pub address: String,
    pub contact_number: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewShop {
    pub name: String,
    pub address: String,
    pub contact_number: Option<String>,
}

/// Quantity of one item held by one shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: String,
    pub shop_id: String,
    pub item_type: ItemType,
    pub quantity: u32,
    pub unit: String,
    pub last_updated: DateTime<Utc>,
}

impl Stock {
    pub fn status(&self) -> StockStatus {
        StockStatus::classify(self.item_type, self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    pub id: String,
    pub user_id: String,
    pub shop_id: String,
    pub ration_card_number: String,
    pub family_size: u32,
}

/// Ration card details supplied when a beneficiary account is created
#[derive(Debug, Clone)]
pub struct BeneficiaryDetails {
    pub shop_id: String,
    pub ration_card_number: String,
    pub family_size: u32,
}
