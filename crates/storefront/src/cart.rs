//! The cart ledger: what the customer is about to buy.
//!
//! Lines are identified by product plus selected variant; adding something
//! already in the cart merges into the existing line. Stock is enforced at
//! add time by clamping, never by error: the cart always stays usable.

use acel_core::Variant;

use crate::types::{CartLine, LineKey, Product};

/// An in-memory shopping cart.
///
/// The ledger itself never touches storage; checkout snapshots its lines
/// into an order.
#[derive(Debug, Default)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a product to the cart.
    ///
    /// The requested quantity is clamped to `1..=stock` before merging; a
    /// merge that would exceed stock is capped at stock. A product with no
    /// stock at all is not added.
    pub fn add_or_merge(&mut self, product: &Product, quantity: u32, variant: Option<Variant>) {
        if product.stock == 0 {
            return;
        }
        let quantity = quantity.clamp(1, product.stock);

        let key = LineKey {
            product_id: product.id,
            variant,
        };
        if let Some(line) = self.lines.iter_mut().find(|line| line.key() == key) {
            line.quantity = (line.quantity + quantity).min(product.stock);
            return;
        }

        self.lines.push(CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            variant: key.variant,
        });
    }

    /// Overwrite the quantity of a line. Returns `false` when no line has
    /// this key.
    ///
    /// The value is stored as given; callers decide their own floor.
    pub fn set_quantity(&mut self, key: &LineKey, quantity: u32) -> bool {
        match self.lines.iter_mut().find(|line| &line.key() == key) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove a line. Returns `false` when no line has this key.
    pub fn remove(&mut self, key: &LineKey) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.key() != key);
        self.lines.len() != before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The lines as they stand, in the order they were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// An owned copy of the lines, for order snapshots.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}
