//! Model-View-Intent (MVI) primitives shared by both screens.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effects) ──→ View
//!    ↑                        │
//!    └──── fetch outcomes ────┘
//! ```
//!
//! - **State**: everything a screen needs to render, besides the shared store
//! - **Intent**: user actions, activations and fetch outcomes
//! - **Reducer**: pure transition; side effects are returned, never performed
//! - **Effect**: store writes and fetches, applied by the app after the transition

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{Reducer, Transition};
pub use state::UiState;
