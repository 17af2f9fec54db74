// storefront/src/lib.rs

//! EliteShop: a two-page demo storefront.
//!
//! `GET /` renders the home page, `GET /products` renders a fixed list of
//! four products. Both answer HTML by default and expose their template
//! context as JSON when asked with `Accept: application/json`.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod web;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use state::AppState;
