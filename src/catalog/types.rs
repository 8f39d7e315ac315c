use serde::{Deserialize, Serialize};

/// A product as served by the remote catalog.
///
/// Products are replaced wholesale on every fetch and never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl Product {
    /// First gallery image, or the thumbnail when the gallery is empty.
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .first()
            .map(String::as_str)
            .or(self.thumbnail.as_deref())
    }

    /// Price as the catalog prints it: `$9.99`, `$10`.
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}

/// Paged envelope returned by the list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}
