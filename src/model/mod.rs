//! Domain types shared by the store and the HTTP layer

pub mod item;
pub mod records;

pub use item::{ItemType, ShopStatus, StockStatus};
pub use records::{Beneficiary, BeneficiaryDetails, NewShop, NewUser, Role, Shop, Stock, User};
