use crate::catalog::Category;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListingPhase {
    /// Never activated.
    #[default]
    Idle,
    Loading,
    Error {
        message: String,
    },
    Ready,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingState {
    pub phase: ListingPhase,
    /// Unique categories of the last full catalog load, first-occurrence order.
    pub categories: Vec<Category>,
    pub active_category: Option<String>,
    /// Stored products came from a fetch for `active_category`, not the full catalog.
    pub filtered: bool,
    /// Bumped on every fetch this screen issues; older outcomes are stale.
    pub generation: u64,
    /// Focused row in the product list.
    pub cursor: usize,
}

impl UiState for ListingState {}

impl ListingState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ListingPhase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ListingPhase::Error { message } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        let active = self.active_category.as_deref()?;
        self.categories.iter().position(|c| c.id == active)
    }

    /// Category `step` tabs away from the active one, wrapping around.
    pub fn neighbour_category(&self, step: isize) -> Option<&str> {
        if self.categories.is_empty() {
            return None;
        }
        let len = self.categories.len() as isize;
        let current = self.active_index().unwrap_or(0) as isize;
        let index = (current + step).rem_euclid(len) as usize;
        Some(self.categories[index].id.as_str())
    }
}
