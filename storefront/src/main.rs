// storefront/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;

use storefront::{telemetry, web, AppConfig, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // RUST_LOG overrides the INFO default
  tracing_subscriber::fmt()
    .with_env_filter(telemetry::env_filter().context("Failed to parse filters from RUST_LOG")?)
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting storefront server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e).context("configuration error");
    }
  };

  let app_state = AppState::new(app_config.clone());
  tracing::info!("Catalog loaded with {} products.", app_state.products.len());

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("failed to bind {}", server_address))?
  .run()
  .await
  .context("server terminated with an error")
}
