// storefront/src/web/handlers/page_handlers.rs

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::Product;
use crate::state::AppState;
use crate::web::render::{self, Page, HOME_TEMPLATE, PRODUCTS_TEMPLATE};

pub const HOME_TITLE: &str = "Home - EliteShop";
pub const HOME_DESCRIPTION: &str = "Discover premium quality products at EliteShop. Shop the latest collection with fast delivery and exceptional customer service.";
pub const PRODUCTS_TITLE: &str = "Products - EliteShop";
pub const PRODUCTS_DESCRIPTION: &str =
  "Browse our premium collection of clothing and accessories. Find the perfect outfit for any occasion.";

#[derive(Debug, Serialize)]
pub struct HomeContext {
  pub page_title: &'static str,
  pub meta_description: &'static str,
}

impl HomeContext {
  pub fn new() -> Self {
    Self {
      page_title: HOME_TITLE,
      meta_description: HOME_DESCRIPTION,
    }
  }
}

impl Default for HomeContext {
  fn default() -> Self {
    Self::new()
  }
}

#[derive(Debug, Serialize)]
pub struct ProductsContext<'a> {
  pub page_title: &'static str,
  pub meta_description: &'static str,
  pub products: &'a [Product],
}

impl<'a> ProductsContext<'a> {
  pub fn new(products: &'a [Product]) -> Self {
    Self {
      page_title: PRODUCTS_TITLE,
      meta_description: PRODUCTS_DESCRIPTION,
      products,
    }
  }
}

#[instrument(name = "handler::home", skip(app_state, req))]
pub async fn home_handler(app_state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, AppError> {
  let page = Page::new(HOME_TEMPLATE, &HomeContext::new())?;
  info!("Rendering {}.", page.template);
  render::respond(&req, &page, &app_state.config.site_name)
}

// Query strings are accepted and ignored; the listing is never filtered.
#[instrument(name = "handler::products", skip(app_state, req))]
pub async fn products_handler(app_state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, AppError> {
  let page = Page::new(PRODUCTS_TEMPLATE, &ProductsContext::new(&app_state.products))?;
  info!("Rendering {} with {} products.", page.template, app_state.products.len());
  render::respond(&req, &page, &app_state.config.site_name)
}
