//! Remote product catalog: data model, category derivation and the HTTP client.

mod category;
mod client;
mod error;
mod types;

pub use category::{display_name, unique_categories, Category};
pub use client::{CatalogApi, HttpCatalog};
pub use error::{CatalogError, ErrorKind};
pub use types::{Product, ProductPage};
