//! The `purchaseHistory` document: the shop-wide order list.
//!
//! The profile keeps its own copy of the same orders; checkout writes both.
//! Status updates only touch this list; the copies in the profile keep the
//! status they were recorded with.

use acel_core::{OrderId, OrderStatus};

use crate::store::{DocumentKey, DocumentStore, StoreError};
use crate::types::Order;

/// Load every order, oldest first.
///
/// # Errors
///
/// Returns `StoreError` only for I/O failures; a missing or corrupt
/// document yields an empty list.
pub fn load_all<S: DocumentStore + ?Sized>(store: &S) -> Result<Vec<Order>, StoreError> {
    super::load_or(store, DocumentKey::PurchaseHistory, Vec::new)
}

/// Replace the whole order list.
///
/// # Errors
///
/// Returns `StoreError` if the document cannot be written.
pub fn save_all<S: DocumentStore + ?Sized>(
    store: &mut S,
    orders: &[Order],
) -> Result<(), StoreError> {
    super::save(store, DocumentKey::PurchaseHistory, &orders)
}

/// Append one order to the list.
///
/// # Errors
///
/// Returns `StoreError` if the list cannot be read or written.
pub fn append<S: DocumentStore + ?Sized>(store: &mut S, order: &Order) -> Result<(), StoreError> {
    let mut orders = load_all(store)?;
    orders.push(order.clone());
    save_all(store, &orders)
}

/// Overwrite the status of one order.
///
/// Returns `false` when no order has the given ID; nothing is written in
/// that case.
///
/// # Errors
///
/// Returns `StoreError` if the list cannot be read or written.
pub fn set_status<S: DocumentStore + ?Sized>(
    store: &mut S,
    id: OrderId,
    status: OrderStatus,
) -> Result<bool, StoreError> {
    let mut orders = load_all(store)?;
    let Some(order) = orders.iter_mut().find(|order| order.id == id) else {
        return Ok(false);
    };
    order.status = status;
    save_all(store, &orders)?;
    Ok(true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use acel_core::{Email, Money, PaymentMethod};
    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;
    use crate::store::MemoryStore;

    fn order(id: i64) -> Order {
        Order {
            id: OrderId::new(id),
            date: Utc::now(),
            customer: "Guest User".to_owned(),
            email: Email::parse("guest@example.com").unwrap(),
            items: Vec::new(),
            subtotal: Money::from_pesos(100),
            discount_percent: Decimal::ZERO,
            discount: Money::ZERO,
            total: Money::from_pesos(100),
            payment_method: PaymentMethod::CreditCard,
            shipping_address: "somewhere".to_owned(),
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn test_append_keeps_order_of_arrival() {
        let mut store = MemoryStore::new();
        append(&mut store, &order(1)).unwrap();
        append(&mut store, &order(2)).unwrap();

        let orders = load_all(&store).unwrap();
        let ids: Vec<i64> = orders.iter().map(|o| o.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_set_status_updates_matching_order() {
        let mut store = MemoryStore::new();
        append(&mut store, &order(1)).unwrap();
        append(&mut store, &order(2)).unwrap();

        let found = set_status(&mut store, OrderId::new(2), OrderStatus::Shipped).unwrap();
        assert!(found);

        let orders = load_all(&store).unwrap();
        assert_eq!(orders[0].status, OrderStatus::Pending);
        assert_eq!(orders[1].status, OrderStatus::Shipped);
    }

    #[test]
    fn test_set_status_unknown_order_reports_false() {
        let mut store = MemoryStore::new();
        append(&mut store, &order(1)).unwrap();

        let found = set_status(&mut store, OrderId::new(99), OrderStatus::Delivered).unwrap();
        assert!(!found);
        assert_eq!(load_all(&store).unwrap()[0].status, OrderStatus::Pending);
    }
}
