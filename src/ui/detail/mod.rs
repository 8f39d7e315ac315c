//! Product detail screen.
//!
//! Uses the MVI pattern:
//! - `state.rs` - phase (Idle → Loading → Ready | Error) for one product id
//! - `intent.rs` - activation, fetch outcome, quantity and add-to-cart actions
//! - `reducer.rs` - transitions; quantity, selection and toast are effects

mod intent;
mod reducer;
mod state;

pub use intent::{DetailEffect, DetailIntent};
pub use reducer::{DetailReducer, ADDED_TO_CART, PRODUCT_LOAD_FAILED, PRODUCT_NOT_FOUND};
pub use state::{DetailPhase, DetailState};
