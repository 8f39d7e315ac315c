//! Render inputs for each screen.
//!
//! These are the screen-level outputs: everything a renderer (terminal or
//! headless printer) needs, borrowed from the app for one frame.

use crate::catalog::{Category, Product};
use crate::store::Quantity;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListingView<'a> {
    pub categories: &'a [Category],
    pub active_category: Option<&'a str>,
    /// Empty while the screen shows an error.
    pub products: &'a [Product],
    pub loading: bool,
    pub error: Option<&'a str>,
    pub cursor: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailView<'a> {
    /// Present only once the current activation has loaded.
    pub product: Option<&'a Product>,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub quantity: Quantity,
    pub toast: Option<&'a str>,
}

impl ListingView<'_> {
    pub fn focused_product(&self) -> Option<&Product> {
        self.products.get(self.cursor)
    }
}
