//! The `returnRequests` document: return requests and their review state.

use crate::store::{DocumentKey, DocumentStore, StoreError};
use crate::types::ReturnRequest;

/// Load every return request, oldest first.
///
/// # Errors
///
/// Returns `StoreError` only for I/O failures; a missing or corrupt
/// document yields an empty list.
pub fn load_all<S: DocumentStore + ?Sized>(store: &S) -> Result<Vec<ReturnRequest>, StoreError> {
    super::load_or(store, DocumentKey::ReturnRequests, Vec::new)
}

/// Replace the whole request list.
///
/// # Errors
///
/// Returns `StoreError` if the document cannot be written.
pub fn save_all<S: DocumentStore + ?Sized>(
    store: &mut S,
    requests: &[ReturnRequest],
) -> Result<(), StoreError> {
    super::save(store, DocumentKey::ReturnRequests, &requests)
}

/// Append one request to the list.
///
/// # Errors
///
/// Returns `StoreError` if the list cannot be read or written.
pub fn append<S: DocumentStore + ?Sized>(
    store: &mut S,
    request: &ReturnRequest,
) -> Result<(), StoreError> {
    let mut requests = load_all(store)?;
    requests.push(request.clone());
    save_all(store, &requests)
}
