// storefront/src/web/handlers/mod.rs

pub mod page_handlers;
