use crate::catalog::{CatalogError, Product};
use crate::ui::mvi::Intent;
use crate::worker::FetchCommand;

#[derive(Debug)]
pub enum DetailIntent {
    /// Screen became visible, or the routed product id changed.
    Activate { id: u64 },
    /// Result of the product fetch issued at `generation`.
    ProductLoaded {
        generation: u64,
        result: Result<Product, CatalogError>,
    },
    Increment,
    Decrement,
    AddToCart,
}

impl Intent for DetailIntent {}

/// Side effects requested by the detail reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailEffect {
    ResetQuantity,
    IncrementQuantity,
    DecrementQuantity,
    SelectProduct(Product),
    ShowToast(&'static str),
    Fetch(FetchCommand),
}
