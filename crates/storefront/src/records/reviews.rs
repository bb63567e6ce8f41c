//! The `reviews` document: product reviews and their aggregates.

use acel_core::ProductId;
use rust_decimal::Decimal;

use crate::store::{DocumentKey, DocumentStore, StoreError};
use crate::types::Review;

/// Load every review, oldest first.
///
/// # Errors
///
/// Returns `StoreError` only for I/O failures; a missing or corrupt
/// document yields an empty list.
pub fn load_all<S: DocumentStore + ?Sized>(store: &S) -> Result<Vec<Review>, StoreError> {
    super::load_or(store, DocumentKey::Reviews, Vec::new)
}

/// Replace the whole review list.
///
/// # Errors
///
/// Returns `StoreError` if the document cannot be written.
pub fn save_all<S: DocumentStore + ?Sized>(
    store: &mut S,
    reviews: &[Review],
) -> Result<(), StoreError> {
    super::save(store, DocumentKey::Reviews, &reviews)
}

/// Append one review to the list.
///
/// # Errors
///
/// Returns `StoreError` if the list cannot be read or written.
pub fn append<S: DocumentStore + ?Sized>(store: &mut S, review: &Review) -> Result<(), StoreError> {
    let mut reviews = load_all(store)?;
    reviews.push(review.clone());
    save_all(store, &reviews)
}

/// The reviews for one product, in posting order.
#[must_use]
pub fn for_product(reviews: &[Review], product_id: ProductId) -> Vec<&Review> {
    reviews
        .iter()
        .filter(|review| review.product_id == product_id)
        .collect()
}

/// Mean star rating rounded to one decimal, or `None` with no reviews.
#[must_use]
pub fn average_rating(reviews: &[Review]) -> Option<Decimal> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|review| u32::from(review.rating)).sum();
    let average = Decimal::from(sum) / Decimal::from(reviews.len());
    Some(average.round_dp(1))
}
