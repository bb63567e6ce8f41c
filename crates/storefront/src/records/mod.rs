//! Typed access to a shop's stored documents.
//!
//! Each submodule owns one document: it knows the document's key, its typed
//! shape, and the small operations the storefront performs on it.
//!
//! All of them share the recovery policy implemented here:
//!
//! - a document that was never written yields its default ("first run")
//! - a corrupt or wrong-shaped document is logged and yields its default;
//!   the next save replaces it
//! - an I/O failure is a real error and propagates
//!
//! Healing instead of failing keeps a shop usable after a bad hand-edit;
//! losing one document's contents is the accepted cost.

pub mod orders;
pub mod profile;
pub mod returns;
pub mod reviews;
pub mod role;
pub mod tickets;
pub mod wishlist;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::store::{DocumentKey, DocumentStore, StoreError};

/// Load a document, falling back to `default` when it is missing or corrupt.
pub(crate) fn load_or<S, T, F>(store: &S, key: DocumentKey, default: F) -> Result<T, StoreError>
where
    S: DocumentStore + ?Sized,
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match store.read(key) {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(typed) => Ok(typed),
            Err(err) => {
                tracing::warn!(
                    document = %key,
                    error = %err,
                    "Stored document has an unexpected shape, using default"
                );
                Ok(default())
            }
        },
        Ok(None) => Ok(default()),
        Err(StoreError::Serialization(err)) => {
            tracing::warn!(
                document = %key,
                error = %err,
                "Stored document is corrupt, using default"
            );
            Ok(default())
        }
        Err(err) => Err(err),
    }
}

/// Serialize and write a document.
pub(crate) fn save<S, T>(store: &mut S, key: DocumentKey, value: &T) -> Result<(), StoreError>
where
    S: DocumentStore + ?Sized,
    T: Serialize,
{
    let value = serde_json::to_value(value)?;
    store.write(key, &value)
}
