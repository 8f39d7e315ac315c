//! Product listing screen.
//!
//! # Architecture
//!
//! Uses the MVI pattern:
//! - `state.rs` - phase (Idle → Loading → Ready | Error), categories, active tab
//! - `intent.rs` - activation, category selection, fetch outcomes, cursor moves
//! - `reducer.rs` - transitions; store writes and fetches are returned as effects

mod intent;
mod reducer;
mod state;

pub use intent::{ListingEffect, ListingIntent};
pub use reducer::{ListingReducer, CATEGORY_LOAD_FAILED, PRODUCTS_LOAD_FAILED};
pub use state::{ListingPhase, ListingState};
