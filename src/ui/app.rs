use std::time::{Duration, Instant};

use tokio::sync::mpsc::error::TrySendError;

use crate::catalog::CatalogError;
use crate::store::ViewStore;
use crate::ui::detail::{DetailEffect, DetailIntent, DetailReducer, DetailState};
use crate::ui::listing::{ListingEffect, ListingIntent, ListingReducer, ListingState};
use crate::ui::mvi::Reducer;
use crate::ui::toast::ToastState;
use crate::ui::view::{DetailView, ListingView};
use crate::worker::{FetchCommand, FetchOutcome, FetchSender};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Listing,
    Detail,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores the new
/// state and yields the effects.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        let transition = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
        $self.$field = transition.state;
        transition.effects
    }};
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    /// Shared view state written by both screens' effects.
    store: ViewStore,
    listing: ListingState,
    detail: DetailState,
    toast: ToastState,
    fetch_sender: FetchSender,
}

impl App {
    pub fn new(fetch_sender: FetchSender, toast_duration: Duration) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Listing,
            store: ViewStore::new(),
            listing: ListingState::default(),
            detail: DetailState::default(),
            toast: ToastState::new(toast_duration),
            fetch_sender,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn store(&self) -> &ViewStore {
        &self.store
    }

    pub fn listing(&self) -> &ListingState {
        &self.listing
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Show the listing screen and activate it.
    pub fn open_listing(&mut self) {
        self.screen = Screen::Listing;
        self.toast.dismiss();
        self.dispatch_listing(ListingIntent::Activate);
    }

    /// Show the detail screen for `id` and activate it.
    pub fn open_product(&mut self, id: u64) {
        self.screen = Screen::Detail;
        self.toast.dismiss();
        self.dispatch_detail(DetailIntent::Activate { id }, Instant::now());
    }

    pub fn open_focused_product(&mut self) {
        let id = self.listing_view().focused_product().map(|p| p.id);
        if let Some(id) = id {
            self.open_product(id);
        }
    }

    /// Leave the detail screen; on the listing screen this quits.
    pub fn back(&mut self) {
        match self.screen {
            Screen::Detail => self.open_listing(),
            Screen::Listing => self.request_quit(),
        }
    }

    /// Re-activate the current screen.
    pub fn reload(&mut self) {
        match self.screen {
            Screen::Listing => self.dispatch_listing(ListingIntent::Activate),
            Screen::Detail => {
                if let Some(id) = self.detail.product_id {
                    self.dispatch_detail(DetailIntent::Activate { id }, Instant::now());
                }
            }
        }
    }

    // ========================================================================
    // Listing actions
    // ========================================================================

    pub fn select_category(&mut self, category: &str) {
        self.dispatch_listing(ListingIntent::SelectCategory {
            category: category.to_string(),
        });
    }

    /// Select the tab `step` positions away from the active one.
    pub fn step_category(&mut self, step: isize) {
        if let Some(category) = self.listing.neighbour_category(step).map(String::from) {
            self.select_category(&category);
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.listing_view().products.len();
        self.dispatch_listing(ListingIntent::MoveCursor { delta, len });
    }

    // ========================================================================
    // Detail actions
    // ========================================================================

    pub fn increment_quantity(&mut self) {
        self.dispatch_detail(DetailIntent::Increment, Instant::now());
    }

    pub fn decrement_quantity(&mut self) {
        self.dispatch_detail(DetailIntent::Decrement, Instant::now());
    }

    pub fn add_to_cart(&mut self, now: Instant) {
        self.dispatch_detail(DetailIntent::AddToCart, now);
    }

    // ========================================================================
    // Events
    // ========================================================================

    pub fn on_tick(&mut self, now: Instant) {
        self.toast.expire(now);
    }

    /// Route a finished fetch to the screen that issued it.
    pub fn on_fetched(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::All { generation, result } => {
                if let Err(err) = &result {
                    tracing::warn!(error = %err, "catalog fetch failed");
                }
                self.trace_stale("listing", generation, self.listing.generation);
                self.dispatch_listing(ListingIntent::CatalogLoaded { generation, result });
            }
            FetchOutcome::Category {
                category,
                generation,
                result,
            } => {
                if let Err(err) = &result {
                    tracing::warn!(%category, error = %err, "category fetch failed");
                }
                self.trace_stale("listing", generation, self.listing.generation);
                self.dispatch_listing(ListingIntent::CategoryLoaded { generation, result });
            }
            FetchOutcome::Product {
                id,
                generation,
                result,
            } => {
                if let Err(err) = &result {
                    tracing::warn!(id, error = %err, "product fetch failed");
                }
                self.trace_stale("detail", generation, self.detail.generation);
                self.dispatch_detail(
                    DetailIntent::ProductLoaded { generation, result },
                    Instant::now(),
                );
            }
        }
    }

    // ========================================================================
    // Views
    // ========================================================================

    pub fn listing_view(&self) -> ListingView<'_> {
        let error = self.listing.error();
        ListingView {
            categories: &self.listing.categories,
            active_category: self.listing.active_category.as_deref(),
            products: if error.is_some() {
                &[]
            } else {
                self.store.products()
            },
            loading: self.listing.is_loading(),
            error,
            cursor: self.listing.cursor,
        }
    }

    pub fn detail_view(&self, now: Instant) -> DetailView<'_> {
        DetailView {
            product: if self.detail.is_ready() {
                self.store.selected_product()
            } else {
                None
            },
            loading: self.detail.is_loading(),
            error: self.detail.error(),
            quantity: self.store.quantity(),
            toast: self.toast.visible_message(now),
        }
    }

    // ========================================================================
    // MVI plumbing
    // ========================================================================

    fn dispatch_listing(&mut self, intent: ListingIntent) {
        let effects = dispatch_mvi!(self, listing, ListingReducer, intent);
        for effect in effects {
            match effect {
                ListingEffect::StoreProducts(products) => self.store.set_products(products),
                ListingEffect::Fetch(command) => self.send_fetch(command),
            }
        }
    }

    fn dispatch_detail(&mut self, intent: DetailIntent, now: Instant) {
        let effects = dispatch_mvi!(self, detail, DetailReducer, intent);
        for effect in effects {
            match effect {
                DetailEffect::ResetQuantity => self.store.reset_quantity(),
                DetailEffect::IncrementQuantity => self.store.increment_quantity(),
                DetailEffect::DecrementQuantity => self.store.decrement_quantity(),
                DetailEffect::SelectProduct(product) => self.store.set_selected_product(product),
                DetailEffect::ShowToast(message) => self.toast.show(message, now),
                DetailEffect::Fetch(command) => self.send_fetch(command),
            }
        }
    }

    /// Hand a command to the worker. If it cannot be queued, the issuing
    /// screen gets a failed outcome instead of waiting forever.
    fn send_fetch(&mut self, command: FetchCommand) {
        if let Err(err) = self.fetch_sender.try_send(command) {
            let reason = match &err {
                TrySendError::Full(_) => "fetch queue full",
                TrySendError::Closed(_) => "fetch worker stopped",
            };
            tracing::warn!(reason, "fetch not dispatched");
            let command = err.into_inner();
            self.on_fetched(command.fail(CatalogError::Dispatch(reason.to_string())));
        }
    }

    fn trace_stale(&self, screen: &'static str, generation: u64, current: u64) {
        if generation != current {
            tracing::debug!(screen, generation, current, "dropping stale fetch outcome");
        }
    }
}
