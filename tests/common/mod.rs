//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod fake_catalog;
pub mod mock_catalog;

use shopfront::catalog::Product;
use shopfront::ui::app::App;
use shopfront::worker::{fetch_channel, FetchReceiver};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

pub const TOAST: Duration = Duration::from_millis(3000);

pub fn product(id: u64, title: &str, category: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        price,
        rating: 4.5,
        category: category.to_string(),
        images: vec![format!("https://cdn.example/{id}.png")],
        thumbnail: None,
    }
}

/// The catalog used by most flows: two donuts and one ice cream.
pub fn sweets() -> Vec<Product> {
    vec![
        product(1, "Glazed Donut", "donuts", 2.5),
        product(2, "Vanilla Cone", "ice-cream", 3.0),
        product(3, "Jelly Donut", "donuts", 2.75),
    ]
}

/// App wired to a fresh fetch queue; drive it with `worker::drain`.
pub fn make_app() -> (App, FetchReceiver) {
    let (tx, rx) = fetch_channel();
    (App::new(tx, TOAST), rx)
}

/// Product list JSON the way the remote catalog wraps it.
pub fn page_json(products: &[Product]) -> String {
    serde_json::json!({
        "products": products,
        "total": products.len(),
        "skip": 0,
        "limit": products.len(),
    })
    .to_string()
}

pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
