//! Integration tests for Acel Market.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p acel-integration-tests
//! ```
//!
//! Each test drives a full [`Session`] over a [`FileStore`] rooted in its
//! own temporary directory, then usually reopens the directory with a
//! fresh session to prove the documents survive. Nothing outside the
//! temporary directory is touched.
//!
//! # Test Categories
//!
//! - `checkout_flow` - Cart, vouchers, purchases, and invoices
//! - `order_lifecycle` - Status updates and return requests
//! - `account_records` - Profile, roles, reviews, tickets, and the wishlist

use std::path::Path;

use acel_core::ProductId;
use acel_storefront::Session;
use acel_storefront::store::FileStore;
use acel_storefront::types::Product;

/// Open a session with the seeded catalog over a file store in `dir`.
///
/// # Panics
///
/// Panics when the directory cannot be used, which fails the calling test.
#[must_use]
pub fn open_session(dir: &Path) -> Session<FileStore> {
    let store = FileStore::open(dir).expect("Failed to open file store in temp dir");
    Session::new(store)
}

/// A clone of a seeded product, ready to be added to the cart.
///
/// # Panics
///
/// Panics when the seeded catalog has no product with this ID, which fails
/// the calling test.
#[must_use]
pub fn seeded_product(session: &Session<FileStore>, id: i64) -> Product {
    session
        .catalog()
        .get(ProductId::new(id))
        .cloned()
        .expect("Seeded catalog is missing the requested product")
}
