// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use actix_web::{web, App};
use once_cell::sync::Lazy;
use std::sync::Arc;
use storefront::{web::configure_app_routes, AppConfig, AppState};
use tracing::Level;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub fn test_state() -> AppState {
  AppState::new(Arc::new(AppConfig::default()))
}

/// Builds the application exactly as `main.rs` does, minus the HTTP listener.
pub fn test_app() -> App<
  impl actix_web::dev::ServiceFactory<
    actix_web::dev::ServiceRequest,
    Config = (),
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
    InitError = (),
  >,
> {
  setup_tracing();
  App::new()
    .app_data(web::Data::new(test_state()))
    .configure(configure_app_routes)
}
