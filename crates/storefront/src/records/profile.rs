//! The `userProfile` document: the active account.

use crate::store::{DocumentKey, DocumentStore, StoreError};
use crate::types::UserProfile;

/// Load the profile, falling back to the guest profile.
///
/// # Errors
///
/// Returns `StoreError` only for I/O failures; a missing or corrupt
/// document yields [`UserProfile::guest`].
pub fn load<S: DocumentStore + ?Sized>(store: &S) -> Result<UserProfile, StoreError> {
    super::load_or(store, DocumentKey::UserProfile, UserProfile::guest)
}

/// Persist the profile.
///
/// # Errors
///
/// Returns `StoreError` if the document cannot be written.
pub fn save<S: DocumentStore + ?Sized>(
    store: &mut S,
    profile: &UserProfile,
) -> Result<(), StoreError> {
    super::save(store, DocumentKey::UserProfile, profile)
}
