//! Checkout: turning a cart into a persisted order.

use chrono::Utc;

use crate::records;
use crate::store::{DocumentStore, StoreError};
use crate::types::Order;

/// Where a session is in the shopping flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutStage {
    /// Browsing and editing the cart.
    #[default]
    Shopping,
    /// Reviewing the priced cart before purchase.
    Reviewing,
    /// Purchase completed; a receipt is available.
    Purchased,
}

/// Monotonic ID source seeded from wall-clock milliseconds.
///
/// Every order, return, review, and ticket gets its ID here. IDs look like
/// timestamps but never repeat within a session: creating two entities in
/// the same millisecond still yields distinct, increasing values.
#[derive(Debug, Default)]
pub struct ReferenceSequence {
    last: i64,
}

impl ReferenceSequence {
    /// A sequence starting at the current wall-clock time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The next reference number.
    pub fn next(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last
    }
}

/// Persist a purchase: append the order to the shop-wide order list, then
/// mirror it into the profile's purchase history.
///
/// The two writes are not atomic. If the profile write fails, the order
/// list already holds the order; the mismatch is logged before the error
/// propagates so the documents can be reconciled.
///
/// # Errors
///
/// Returns `StoreError` when either document cannot be read or written.
pub fn record_purchase<S: DocumentStore + ?Sized>(
    store: &mut S,
    order: &Order,
) -> Result<(), StoreError> {
    records::orders::append(store, order)?;

    let mut profile = records::profile::load(store)?;
    profile.purchase_history.push(order.clone());
    if let Err(err) = records::profile::save(store, &profile) {
        tracing::warn!(
            order = %order.id,
            error = %err,
            "Order list updated but the profile history write failed"
        );
        return Err(err);
    }

    Ok(())
}
