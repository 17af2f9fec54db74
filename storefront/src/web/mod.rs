// storefront/src/web/mod.rs

pub mod handlers;
pub mod render;
pub mod routes;

pub use routes::configure_app_routes;
