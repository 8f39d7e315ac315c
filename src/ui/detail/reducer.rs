use crate::ui::mvi::{Reducer, Transition};
use crate::worker::FetchCommand;

use super::intent::{DetailEffect, DetailIntent};
use super::state::{DetailPhase, DetailState};

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const PRODUCT_LOAD_FAILED: &str = "Failed to load product";
pub const ADDED_TO_CART: &str = "Added to cart";

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;
    type Effect = DetailEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        match intent {
            DetailIntent::Activate { id } => {
                let generation = state.generation + 1;
                // Quantity reset and fetch are issued together; neither waits on the other.
                Transition::with_effects(
                    DetailState {
                        phase: DetailPhase::Loading,
                        product_id: Some(id),
                        generation,
                    },
                    vec![
                        DetailEffect::Fetch(FetchCommand::Product { id, generation }),
                        DetailEffect::ResetQuantity,
                    ],
                )
            }

            DetailIntent::ProductLoaded { generation, result } => {
                if generation != state.generation {
                    return Transition::to(state);
                }
                match result {
                    Ok(product) => Transition::with_effects(
                        DetailState {
                            phase: DetailPhase::Ready,
                            ..state
                        },
                        vec![DetailEffect::SelectProduct(product)],
                    ),
                    Err(err) => {
                        let message = if err.is_not_found() {
                            PRODUCT_NOT_FOUND
                        } else {
                            PRODUCT_LOAD_FAILED
                        };
                        Transition::to(DetailState {
                            phase: DetailPhase::Error {
                                message: message.to_string(),
                            },
                            ..state
                        })
                    }
                }
            }

            DetailIntent::Increment if state.is_ready() => {
                Transition::with_effects(state, vec![DetailEffect::IncrementQuantity])
            }
            DetailIntent::Decrement if state.is_ready() => {
                Transition::with_effects(state, vec![DetailEffect::DecrementQuantity])
            }
            DetailIntent::AddToCart if state.is_ready() => {
                Transition::with_effects(state, vec![DetailEffect::ShowToast(ADDED_TO_CART)])
            }
            DetailIntent::Increment | DetailIntent::Decrement | DetailIntent::AddToCart => {
                Transition::to(state)
            }
        }
    }
}
