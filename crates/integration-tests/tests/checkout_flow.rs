//! Integration tests for the checkout flow.
//!
//! Carts live in memory, so every assertion about persistence reopens the
//! data directory with a brand-new session and checks what a second visit
//! to the shop would actually see.
//!
//! Run with: cargo test -p acel-integration-tests

use acel_core::{Money, OrderStatus, PaymentMethod};
use acel_integration_tests::{open_session, seeded_product};
use tempfile::TempDir;

// ============================================================================
// Purchases
// ============================================================================

#[test]
fn test_purchase_survives_reopening_the_shop() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let order_id = {
        let mut session = open_session(dir.path());
        let tee = seeded_product(&session, 3);
        session.add_to_cart(&tee, 2, None);
        session
            .apply_voucher("ACEL")
            .expect("Welcome voucher should be accepted");

        let receipt = session
            .purchase(PaymentMethod::Gcash, "12 Mabini St, Quezon City")
            .expect("Purchase should succeed");
        assert_eq!(receipt.subtotal, Money::from_pesos(1000));
        assert_eq!(receipt.total, Money::from_pesos(900));
        receipt.id
    };

    let session = open_session(dir.path());
    let orders = session.orders().expect("Orders should load");
    assert_eq!(orders.len(), 1);

    let order = orders.first().expect("One order was placed");
    assert_eq!(order.id, order_id);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, Money::from_pesos(900));
    assert_eq!(order.payment_method, PaymentMethod::Gcash);

    // Both collections hold the same purchase under the same reference
    let profile = session.profile().expect("Profile should load");
    assert_eq!(profile.purchase_history.len(), 1);
    let copy = profile.purchase_history.first().expect("History has the order");
    assert_eq!(copy.id, order_id);
    assert_eq!(copy.items, order.items);
    assert_eq!(copy.total, order.total);
    assert_eq!(profile.total_spent(), Money::from_pesos(900));
    assert_eq!(profile.order_count(), 1);
}

#[test]
fn test_consecutive_orders_get_increasing_ids() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut session = open_session(dir.path());
    let tee = seeded_product(&session, 3);

    session.add_to_cart(&tee, 1, None);
    let first = session
        .purchase(PaymentMethod::Gcash, "12 Mabini St")
        .expect("First purchase should succeed")
        .id;
    session.complete_order();

    session.add_to_cart(&tee, 1, None);
    let second = session
        .purchase(PaymentMethod::CashOnDelivery, "12 Mabini St")
        .expect("Second purchase should succeed")
        .id;

    assert!(second.as_i64() > first.as_i64());

    let session = open_session(dir.path());
    assert_eq!(session.orders().expect("Orders should load").len(), 2);
}

#[test]
fn test_failed_purchase_writes_nothing() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut session = open_session(dir.path());

    // Empty cart
    assert!(session.purchase(PaymentMethod::Gcash, "12 Mabini St").is_err());

    // Blank shipping address
    let tee = seeded_product(&session, 3);
    session.add_to_cart(&tee, 1, None);
    assert!(session.purchase(PaymentMethod::Gcash, "   ").is_err());

    let entries = std::fs::read_dir(dir.path())
        .expect("Failed to read temp dir")
        .count();
    assert_eq!(entries, 0, "a rejected purchase must not write documents");
}

// ============================================================================
// Invoices
// ============================================================================

#[test]
fn test_invoice_renders_from_a_fresh_session() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let order_id = {
        let mut session = open_session(dir.path());
        let tee = seeded_product(&session, 3);
        session.add_to_cart(&tee, 1, None);
        session
            .purchase(PaymentMethod::CreditCard, "Unit 4B, Pasig")
            .expect("Purchase should succeed")
            .id
    };

    let session = open_session(dir.path());
    let invoice = session.invoice(order_id).expect("Invoice should render");

    assert!(invoice.contains(&format!("Order ID: #{order_id}")));
    assert!(invoice.contains("Classic Tee"));
    assert!(invoice.contains("Color: Black"));
    assert!(invoice.contains("Payment Method: Credit Card"));
    assert!(invoice.contains("Thank you for your purchase!"));
}
