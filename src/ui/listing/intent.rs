use crate::catalog::{CatalogError, Product};
use crate::ui::mvi::Intent;
use crate::worker::FetchCommand;

#[derive(Debug)]
pub enum ListingIntent {
    /// Screen became visible: load the whole catalog.
    Activate,
    /// Result of the full-catalog fetch issued at `generation`.
    CatalogLoaded {
        generation: u64,
        result: Result<Vec<Product>, CatalogError>,
    },
    /// User picked a category tab.
    SelectCategory { category: String },
    /// Result of the per-category fetch issued at `generation`.
    CategoryLoaded {
        generation: u64,
        result: Result<Vec<Product>, CatalogError>,
    },
    /// Move the product cursor by `delta` within a list of `len` products.
    MoveCursor { delta: isize, len: usize },
}

impl Intent for ListingIntent {}

/// Side effects requested by the listing reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingEffect {
    /// Replace the shared product collection.
    StoreProducts(Vec<Product>),
    Fetch(FetchCommand),
}
