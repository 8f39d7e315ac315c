use crate::catalog::unique_categories;
use crate::ui::mvi::{Reducer, Transition};
use crate::worker::FetchCommand;

use super::intent::{ListingEffect, ListingIntent};
use super::state::{ListingPhase, ListingState};

pub const PRODUCTS_LOAD_FAILED: &str = "Failed to load products";
pub const CATEGORY_LOAD_FAILED: &str = "Failed to load products for category";

/// Reducer for the listing screen.
///
/// Pure: writing the store and issuing fetches happen in the caller, driven
/// by the returned effects.
pub struct ListingReducer;

impl Reducer for ListingReducer {
    type State = ListingState;
    type Intent = ListingIntent;
    type Effect = ListingEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        match intent {
            ListingIntent::Activate => {
                let generation = state.generation + 1;
                Transition::with_effects(
                    ListingState {
                        phase: ListingPhase::Loading,
                        generation,
                        filtered: false,
                        ..state
                    },
                    vec![ListingEffect::Fetch(FetchCommand::All { generation })],
                )
            }

            ListingIntent::CatalogLoaded { generation, result } => {
                if generation != state.generation {
                    return Transition::to(state);
                }
                match result {
                    Ok(products) => {
                        let categories = unique_categories(&products);
                        let active_category = categories.first().map(|c| c.id.clone());
                        Transition::with_effects(
                            ListingState {
                                phase: ListingPhase::Ready,
                                categories,
                                active_category,
                                filtered: false,
                                cursor: 0,
                                ..state
                            },
                            vec![ListingEffect::StoreProducts(products)],
                        )
                    }
                    Err(_) => Transition::to(ListingState {
                        phase: ListingPhase::Error {
                            message: PRODUCTS_LOAD_FAILED.to_string(),
                        },
                        ..state
                    }),
                }
            }

            ListingIntent::SelectCategory { category } => {
                let known = state.categories.iter().any(|c| c.id == category);
                let unchanged = state.active_category.as_deref() == Some(category.as_str());
                // The first tab is active over the full catalog; selecting it filters.
                if !known || (unchanged && (state.filtered || state.is_loading())) {
                    return Transition::to(state);
                }
                let generation = state.generation + 1;
                Transition::with_effects(
                    ListingState {
                        phase: ListingPhase::Loading,
                        active_category: Some(category.clone()),
                        filtered: false,
                        generation,
                        ..state
                    },
                    vec![ListingEffect::Fetch(FetchCommand::Category {
                        category,
                        generation,
                    })],
                )
            }

            ListingIntent::CategoryLoaded { generation, result } => {
                if generation != state.generation {
                    return Transition::to(state);
                }
                match result {
                    Ok(products) => Transition::with_effects(
                        ListingState {
                            phase: ListingPhase::Ready,
                            filtered: true,
                            cursor: 0,
                            ..state
                        },
                        vec![ListingEffect::StoreProducts(products)],
                    ),
                    Err(_) => Transition::to(ListingState {
                        phase: ListingPhase::Error {
                            message: CATEGORY_LOAD_FAILED.to_string(),
                        },
                        ..state
                    }),
                }
            }

            ListingIntent::MoveCursor { delta, len } => {
                let cursor = if len == 0 {
                    0
                } else {
                    (state.cursor as isize)
                        .saturating_add(delta)
                        .clamp(0, len as isize - 1) as usize
                };
                Transition::to(ListingState { cursor, ..state })
            }
        }
    }
}
