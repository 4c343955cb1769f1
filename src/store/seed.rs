//! Demo records loaded at startup

use tracing::info;

use crate::model::{Beneficiary, ItemType, Role, Shop, User};

use super::RecordStore;

const SHOPS: [(&str, &str, &str, &str); 3] = [
    ("shop1", "Main Street Shop", "123 Main Street", "555-0101"),
    ("shop2", "Central Market Shop", "456 Central Avenue", "555-0102"),
    ("shop3", "East Side Shop", "789 East Road", "555-0103"),
];

/// Quantities per shop in `ItemType::ALL` order
const STOCK: [(&str, [u32; 4]); 3] = [
    ("shop1", [450, 125, 280, 0]),
    ("shop2", [520, 380, 195, 150]),
    ("shop3", [0, 0, 45, 0]),
];

/// Populate the store with the demo shops, accounts and stock levels
pub fn seed_demo_data(store: &RecordStore) {
    for (id, name, address, contact) in SHOPS {
        store.insert_shop(Shop {
            id: id.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            contact_number: Some(contact.to_string()),
        });
    }

    let users = [
        ("admin1", "admin@pds.gov", "admin123", Role::Admin, "Admin User", None),
        ("shop1", "shop@mainstreet.com", "shop123", Role::Shop, "Shop Manager", Some("shop1")),
        ("ben1", "john@example.com", "user123", Role::Beneficiary, "John Doe", None),
    ];
    for (id, email, password, role, name, shop_id) in users {
        store.insert_user(User {
            id: id.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
            name: name.to_string(),
            shop_id: shop_id.map(str::to_string),
        });
    }

    store.insert_beneficiary(Beneficiary {
        id: "ben1".to_string(),
        user_id: "ben1".to_string(),
        shop_id: "shop1".to_string(),
        ration_card_number: "RC123456".to_string(),
        family_size: 4,
    });

    for (shop_id, quantities) in STOCK {
        for (item_type, quantity) in ItemType::ALL.into_iter().zip(quantities) {
            store.update_stock(shop_id, item_type, quantity);
        }
    }

    info!(
        shops = SHOPS.len(),
        users = store.user_count(),
        stock_rows = store.all_stock().len(),
        "Seeded demo data"
    );
}
