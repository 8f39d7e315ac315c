//! In-process `CatalogApi` with scripted results.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use shopfront::catalog::{CatalogApi, CatalogError, Product};

/// One call made against the fake, for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    All,
    Category(String),
    Product(u64),
}

/// Serves a fixed product list. Categories filter that list unless a
/// failure was scripted for them; unknown ids come back as NotFound.
#[derive(Default)]
pub struct FakeCatalog {
    products: Vec<Product>,
    fail_all: bool,
    failing_categories: Vec<String>,
    failing_products: Vec<u64>,
    calls: Mutex<Vec<Call>>,
}

impl FakeCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    pub fn failing_all(mut self) -> Self {
        self.fail_all = true;
        self
    }

    pub fn failing_category(mut self, category: &str) -> Self {
        self.failing_categories.push(category.to_string());
        self
    }

    /// Product fetches for `id` fail with a server error.
    pub fn failing_product(mut self, id: u64) -> Self {
        self.failing_products.push(id);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }
}

fn server_error(path: &str) -> CatalogError {
    CatalogError::Status {
        url: format!("http://fake{path}"),
        status: 500,
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        self.record(Call::All);
        if self.fail_all {
            return Err(server_error("/products"));
        }
        Ok(self.products.clone())
    }

    async fn fetch_one(&self, id: u64) -> Result<Product, CatalogError> {
        self.record(Call::Product(id));
        if self.failing_products.contains(&id) {
            return Err(server_error(&format!("/products/{id}")));
        }
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound { id })
    }

    async fn fetch_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        self.record(Call::Category(category.to_string()));
        if self.failing_categories.iter().any(|c| c == category) {
            return Err(server_error(&format!("/products/category/{category}")));
        }
        Ok(self
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }
}
