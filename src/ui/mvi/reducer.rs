//! Reducer trait and the transition it produces.

use super::intent::Intent;
use super::state::UiState;

/// Result of one reduction: the next state plus the effects to run.
#[derive(Debug, PartialEq)]
pub struct Transition<S, E> {
    pub state: S,
    pub effects: Vec<E>,
}

impl<S, E> Transition<S, E> {
    /// Move to `state` with nothing else to do.
    pub fn to(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn with_effects(state: S, effects: Vec<E>) -> Self {
        Self { state, effects }
    }
}

/// The only place where screen state transitions happen.
///
/// `reduce` must be pure: `(State, Intent) -> (State, Effects)`. Whoever
/// dispatches is responsible for applying the effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;
    type Effect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect>;
}
