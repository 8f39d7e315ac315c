//! Base trait for screen state.

/// Marker trait for screen state objects.
///
/// States are cloneable snapshots with a well-defined initial value, so a
/// reducer can take the current one by value via `std::mem::take`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
