//! The `userRole` document: the active role, stored on its own.
//!
//! The role also lives inside the profile; keeping a separate document
//! makes switching roles a single small write and lets tools check the
//! active role without deserializing the whole profile.

use acel_core::Role;

use crate::store::{DocumentKey, DocumentStore, StoreError};

/// Load the active role, falling back to `Customer`.
///
/// # Errors
///
/// Returns `StoreError` only for I/O failures; a missing or corrupt
/// document yields the default role.
pub fn load<S: DocumentStore + ?Sized>(store: &S) -> Result<Role, StoreError> {
    super::load_or(store, DocumentKey::UserRole, Role::default)
}

/// Persist the active role.
///
/// # Errors
///
/// Returns `StoreError` if the document cannot be written.
pub fn save<S: DocumentStore + ?Sized>(store: &mut S, role: Role) -> Result<(), StoreError> {
    super::save(store, DocumentKey::UserRole, &role)
}
