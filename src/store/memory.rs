//! In-memory record store
//!
//! Four insertion-ordered tables behind one lock. Writes to the same stock key
//! simply replace each other, last write wins.

use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::model::{
    Beneficiary, BeneficiaryDetails, ItemType, NewShop, NewUser, Role, Shop, Stock, User,
};

/// Composite primary key of a stock row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StockKey {
    shop_id: String,
    item_type: ItemType,
}

impl StockKey {
    fn new(shop_id: &str, item_type: ItemType) -> Self {
        Self {
            shop_id: shop_id.to_string(),
            item_type,
        }
    }
}

#[derive(Default)]
struct Tables {
    users: IndexMap<String, User>,
    shops: IndexMap<String, Shop>,
    stock: IndexMap<StockKey, Stock>,
    beneficiaries: IndexMap<String, Beneficiary>,
}

/// Shared handle to the record tables
#[derive(Clone, Default)]
pub struct RecordStore {
    tables: Arc<RwLock<Tables>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    pub fn get_user_by_email_and_role(&self, email: &str, role: Role) -> Option<User> {
        self.tables
            .read()
            .users
            .values()
            .find(|u| u.email == email && u.role == role)
            .cloned()
    }

    pub fn user_count(&self) -> usize {
        self.tables.read().users.len()
    }

    /// Create a user with a generated id, plus its beneficiary record when
    /// ration card details are given. Both are checked before either is stored.
    pub fn create_account(
        &self,
        new_user: NewUser,
        details: Option<BeneficiaryDetails>,
    ) -> Result<(User, Option<Beneficiary>), StoreError> {
        let mut tables = self.tables.write();

        if tables.users.values().any(|u| u.email == new_user.email) {
            return Err(StoreError::DuplicateEmail(new_user.email));
        }
        if let Some(details) = &details {
            if tables
                .beneficiaries
                .values()
                .any(|b| b.ration_card_number == details.ration_card_number)
            {
                return Err(StoreError::DuplicateRationCard(
                    details.ration_card_number.clone(),
                ));
            }
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: new_user.email,
            password: new_user.password,
            role: new_user.role,
            name: new_user.name,
            shop_id: new_user.shop_id,
        };
        tables.users.insert(user.id.clone(), user.clone());

        let beneficiary = details.map(|details| {
            let beneficiary = Beneficiary {
                id: Uuid::new_v4().to_string(),
                user_id: user.id.clone(),
                shop_id: details.shop_id,
                ration_card_number: details.ration_card_number,
                family_size: details.family_size,
            };
            tables
                .beneficiaries
                .insert(beneficiary.id.clone(), beneficiary.clone());
            beneficiary
        });

        Ok((user, beneficiary))
    }

    pub(crate) fn insert_user(&self, user: User) {
        self.tables.write().users.insert(user.id.clone(), user);
    }

    // ------------------------------------------------------------------
    // Shops
    // ------------------------------------------------------------------

    pub fn get_shop(&self, id: &str) -> Option<Shop> {
        self.tables.read().shops.get(id).cloned()
    }

    pub fn all_shops(&self) -> Vec<Shop> {
        self.tables.read().shops.values().cloned().collect()
    }

    pub fn create_shop(&self, new_shop: NewShop) -> Shop {
        let shop = Shop {
            id: Uuid::new_v4().to_string(),
            name: new_shop.name,
            address: new_shop.address,
            contact_number: new_shop.contact_number,
        };
        self.insert_shop(shop.clone());
        shop
    }

    pub(crate) fn insert_shop(&self, shop: Shop) {
        self.tables.write().shops.insert(shop.id.clone(), shop);
    }

    // ------------------------------------------------------------------
    // Stock
    // ------------------------------------------------------------------

    pub fn stock_by_shop(&self, shop_id: &str) -> Vec<Stock> {
        self.tables
            .read()
            .stock
            .values()
            .filter(|s| s.shop_id == shop_id)
            .cloned()
            .collect()
    }

    pub fn stock_by_shop_and_item(&self, shop_id: &str, item_type: ItemType) -> Option<Stock> {
        self.tables
            .read()
            .stock
            .get(&StockKey::new(shop_id, item_type))
            .cloned()
    }

    pub fn all_stock(&self) -> Vec<Stock> {
        self.tables.read().stock.values().cloned().collect()
    }

    /// Overwrite the quantity of one (shop, item) row, creating it if needed.
    /// An existing row keeps its id and its position in listings.
    pub fn update_stock(&self, shop_id: &str, item_type: ItemType, quantity: u32) -> Stock {
        let key = StockKey::new(shop_id, item_type);
        let mut tables = self.tables.write();

        let id = tables
            .stock
            .get(&key)
            .map(|existing| existing.id.clone())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let row = Stock {
            id,
            shop_id: shop_id.to_string(),
            item_type,
            quantity,
            unit: item_type.unit().to_string(),
            last_updated: Utc::now(),
        };
        tables.stock.insert(key, row.clone());
        row
    }

    // ------------------------------------------------------------------
    // Beneficiaries
    // ------------------------------------------------------------------

    pub fn beneficiary_by_user_id(&self, user_id: &str) -> Option<Beneficiary> {
        self.tables
            .read()
            .beneficiaries
            .values()
            .find(|b| b.user_id == user_id)
            .cloned()
    }

    pub(crate) fn insert_beneficiary(&self, beneficiary: Beneficiary) {
        self.tables
            .write()
            .beneficiaries
            .insert(beneficiary.id.clone(), beneficiary);
    }
}

/// Record store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Ration card already registered: {0}")]
    DuplicateRationCard(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str, role: Role) -> NewUser {
        NewUser {
            email: email.to_string(),
            password: "pw".to_string(),
            role,
            name: "Test".to_string(),
            shop_id: None,
        }
    }

    #[test]
    fn second_update_wins() {
        let store = RecordStore::new();
        let first = store.update_stock("shop9", ItemType::Rice, 10);
        let second = store.update_stock("shop9", ItemType::Rice, 20);

        assert_eq!(first.id, second.id);
        let rows = store.stock_by_shop("shop9");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantity, 20);
        assert_eq!(
            store.stock_by_shop_and_item("shop9", ItemType::Rice).map(|s| s.quantity),
            Some(20)
        );
    }

    #[test]
    fn update_derives_unit_and_keeps_position() {
        let store = RecordStore::new();
        store.update_stock("s", ItemType::Rice, 1);
        store.update_stock("s", ItemType::Kerosene, 2);
        store.update_stock("s", ItemType::Rice, 3);

        let rows = store.stock_by_shop("s");
        assert_eq!(rows[0].item_type, ItemType::Rice);
        assert_eq!(rows[0].unit, "kg");
        assert_eq!(rows[1].item_type, ItemType::Kerosene);
        assert_eq!(rows[1].unit, "L");
    }

    #[test]
    fn stock_for_unknown_shop_is_empty() {
        let store = RecordStore::new();
        assert!(store.stock_by_shop("nowhere").is_empty());
        assert!(store.stock_by_shop_and_item("nowhere", ItemType::Sugar).is_none());
    }

    #[test]
    fn lookup_is_scoped_by_role() {
        let store = RecordStore::new();
        store
            .create_account(new_user("a@b.com", Role::Admin), None)
            .unwrap();

        assert!(store.get_user_by_email_and_role("a@b.com", Role::Admin).is_some());
        assert!(store.get_user_by_email_and_role("a@b.com", Role::Shop).is_none());
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let store = RecordStore::new();
        store
            .create_account(new_user("a@b.com", Role::Admin), None)
            .unwrap();
        let err = store
            .create_account(new_user("a@b.com", Role::Shop), None)
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail(_)));
        assert_eq!(store.user_count(), 1);
    }

    #[test]
    fn duplicate_ration_card_stores_nothing() {
        let store = RecordStore::new();
        let details = BeneficiaryDetails {
            shop_id: "shop1".to_string(),
            ration_card_number: "RC1".to_string(),
            family_size: 3,
        };
        let (user, beneficiary) = store
            .create_account(new_user("a@b.com", Role::Beneficiary), Some(details.clone()))
            .unwrap();
        let beneficiary = beneficiary.unwrap();
        assert_eq!(beneficiary.user_id, user.id);
        assert_eq!(store.beneficiary_by_user_id(&user.id), Some(beneficiary));

        let err = store
            .create_account(new_user("c@d.com", Role::Beneficiary), Some(details))
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateRationCard(_)));
        assert_eq!(store.user_count(), 1);
    }

    #[test]
    fn created_shops_are_listed_in_order() {
        let store = RecordStore::new();
        let a = store.create_shop(NewShop {
            name: "A".into(),
            address: "1 Road".into(),
            contact_number: None,
        });
        let b = store.create_shop(NewShop {
            name: "B".into(),
            address: "2 Road".into(),
            contact_number: Some("555".into()),
        });

        let ids: Vec<_> = store.all_shops().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a.id.clone(), b.id]);
        assert_eq!(store.get_shop(&a.id), Some(a));
    }
}
