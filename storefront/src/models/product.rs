// storefront/src/models/product.rs

use serde::Serialize;
use std::fmt;

/// Garment size code. Serialized as the bare code (`"S"`, `"XL"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Size {
  S,
  M,
  L,
  XL,
}

impl Size {
  pub fn code(&self) -> &'static str {
    match self {
      Size::S => "S",
      Size::M => "M",
      Size::L => "L",
      Size::XL => "XL",
    }
  }
}

impl fmt::Display for Size {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

// category, color and sizes are carried for display only; nothing filters on them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
  pub id: u32,
  pub name: String,
  pub brand: String,
  pub price: u32,
  pub original_price: Option<u32>,
  pub category: String,
  pub sizes: Vec<Size>,
  pub color: String,
  pub image: String,
  pub rating: u8,
  pub rating_count: u32,
  pub badge: Option<String>,
  pub is_sale: bool,
}
