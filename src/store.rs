//! Shared view state read by both screens.
//!
//! A flat container with setters. Every operation is synchronous, cannot
//! fail and is visible to the next reader immediately; there is no
//! transactional grouping between writes.

use crate::catalog::Product;

/// Selected purchase quantity. Never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn incremented(self) -> Self {
        Quantity(self.0.saturating_add(1))
    }

    pub fn decremented(self) -> Self {
        Quantity(self.0.saturating_sub(1).max(1))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

#[derive(Debug, Default)]
pub struct ViewStore {
    products: Vec<Product>,
    selected: Option<Product>,
    quantity: Quantity,
}

impl ViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn set_selected_product(&mut self, product: Product) {
        self.selected = Some(product);
    }

    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.incremented();
    }

    pub fn decrement_quantity(&mut self) {
        self.quantity = self.quantity.decremented();
    }

    pub fn reset_quantity(&mut self) {
        self.quantity = Quantity::ONE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    enum Op {
        Inc,
        Dec,
        Reset,
    }

    #[test]
    fn starts_empty_with_quantity_one() {
        let store = ViewStore::new();
        assert!(store.products().is_empty());
        assert!(store.selected_product().is_none());
        assert_eq!(store.quantity().get(), 1);
    }

    #[test]
    fn decrement_from_one_stays_one() {
        let mut store = ViewStore::new();
        store.decrement_quantity();
        store.decrement_quantity();
        assert_eq!(store.quantity(), Quantity::ONE);
    }

    #[test]
    fn increment_then_decrement() {
        let mut store = ViewStore::new();
        store.increment_quantity();
        store.increment_quantity();
        assert_eq!(store.quantity().get(), 3);
        store.decrement_quantity();
        assert_eq!(store.quantity().get(), 2);
        store.reset_quantity();
        assert_eq!(store.quantity().get(), 1);
    }

    #[test]
    fn quantity_never_drops_below_one() {
        // Walk every sequence of length 8 over {inc, dec, reset}.
        let ops = [Op::Inc, Op::Dec, Op::Reset];
        let len = 8u32;
        for mut code in 0..3usize.pow(len) {
            let mut store = ViewStore::new();
            for _ in 0..len {
                match ops[code % 3] {
                    Op::Inc => store.increment_quantity(),
                    Op::Dec => store.decrement_quantity(),
                    Op::Reset => store.reset_quantity(),
                }
                code /= 3;
                assert!(store.quantity().get() >= 1);
            }
        }
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        assert_eq!(Quantity(u32::MAX).incremented().get(), u32::MAX);
    }
}
