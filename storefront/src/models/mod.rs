// storefront/src/models/mod.rs

//! Plain data records rendered by the storefront pages.

pub mod product;

pub use product::{Product, Size};
