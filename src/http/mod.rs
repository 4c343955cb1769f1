//! HTTP layer: router, handlers, middleware and error mapping

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod stock;

pub use routes::build_router;
