// storefront/src/state.rs
use crate::config::AppConfig;
use crate::models::Product;
use crate::services::catalog;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub products: Arc<Vec<Product>>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  pub fn new(config: Arc<AppConfig>) -> Self {
    Self {
      products: Arc::new(catalog::sample_products()),
      config,
    }
  }
}
