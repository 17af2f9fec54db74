// storefront/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::page_handlers;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` and from the integration tests to mount every route.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/", web::get().to(page_handlers::home_handler))
    .route("/products", web::get().to(page_handlers::products_handler))
    .route("/health", web::get().to(health_check_handler));
}
