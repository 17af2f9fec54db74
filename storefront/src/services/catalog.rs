// storefront/src/services/catalog.rs

use crate::models::{Product, Size};
use tracing::debug;

/// The fixed product list served by the products page.
///
/// Built once when the application state is created and shared read-only
/// across workers afterwards.
pub fn sample_products() -> Vec<Product> {
  let products = vec![
    Product {
      id: 1,
      name: "Elegant Blue Dress".to_string(),
      brand: "EliteShop".to_string(),
      price: 299,
      original_price: Some(399),
      category: "dresses".to_string(),
      sizes: vec![Size::S, Size::M, Size::L],
      color: "blue".to_string(),
      image: "product-1.jpg".to_string(),
      rating: 5,
      rating_count: 24,
      badge: Some("New".to_string()),
      is_sale: false,
    },
    Product {
      id: 2,
      name: "Premium White Shirt".to_string(),
      brand: "Premium".to_string(),
      price: 129,
      original_price: None,
      category: "shirts".to_string(),
      sizes: vec![Size::M, Size::L, Size::XL],
      color: "white".to_string(),
      image: "product-2.jpg".to_string(),
      rating: 4,
      rating_count: 18,
      badge: None,
      is_sale: false,
    },
    Product {
      id: 3,
      name: "Luxury Black Pants".to_string(),
      brand: "Luxury".to_string(),
      price: 189,
      original_price: Some(249),
      category: "pants".to_string(),
      sizes: vec![Size::S, Size::M, Size::L, Size::XL],
      color: "black".to_string(),
      image: "product-3.jpg".to_string(),
      rating: 5,
      rating_count: 32,
      badge: Some("Sale".to_string()),
      is_sale: true,
    },
    Product {
      id: 4,
      name: "Stylish Red Jacket".to_string(),
      brand: "EliteShop".to_string(),
      price: 399,
      original_price: None,
      category: "jackets".to_string(),
      sizes: vec![Size::M, Size::L],
      color: "red".to_string(),
      image: "product-4.jpg".to_string(),
      rating: 5,
      rating_count: 15,
      badge: None,
      is_sale: false,
    },
  ];
  debug!("Catalog built with {} products.", products.len());
  products
}
