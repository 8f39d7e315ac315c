//! Category tags derived from a fetched product collection.

use std::collections::HashSet;

use crate::catalog::types::Product;

/// A category tag plus its human-readable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Raw tag, matches `Product::category`.
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let name = display_name(&id);
        Self { id, name }
    }
}

/// `"ice-cream"` -> `"Ice Cream"`.
///
/// Hyphens become spaces and the first character of every space-separated
/// word is upper-cased. Empty words survive, so `"a--b"` -> `"A  B"`.
pub fn display_name(id: &str) -> String {
    id.replace('-', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Unique categories in order of first occurrence.
pub fn unique_categories(products: &[Product]) -> Vec<Category> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|product| seen.insert(product.category.as_str()))
        .map(|product| Category::new(product.category.as_str()))
        .collect()
}
