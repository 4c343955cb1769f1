//! Record storage for users, shops, stock and beneficiaries

pub mod memory;
pub mod seed;

pub use memory::{RecordStore, StoreError};
pub use seed::seed_demo_data;
