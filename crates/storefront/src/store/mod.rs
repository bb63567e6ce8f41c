//! Persistent document storage for a shop.
//!
//! A shop's state lives in a handful of JSON documents, one per
//! [`DocumentKey`]:
//!
//! - `userProfile` - The active account profile
//! - `purchaseHistory` - Shop-wide order list
//! - `returnRequests` - Return requests and their review state
//! - `reviews` - Product reviews
//! - `supportTickets` - Customer support tickets
//! - `wishlist` - Saved product IDs
//! - `userRole` - Active role, kept separately so role switches are cheap
//!
//! The [`DocumentStore`] trait abstracts where those documents live:
//! [`FileStore`] keeps one file per document under a data directory, and
//! [`MemoryStore`] backs tests and throwaway sessions.
//!
//! Stores deal in raw [`serde_json::Value`]s; typed encode/decode and the
//! recovery policy for corrupt documents live in [`crate::records`].

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde_json::Value as JsonValue;
use thiserror::Error;

/// Errors from reading or writing stored documents.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A document exists but is not valid JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The fixed set of documents a shop persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKey {
    UserProfile,
    PurchaseHistory,
    ReturnRequests,
    Reviews,
    SupportTickets,
    Wishlist,
    UserRole,
}

impl DocumentKey {
    /// Every document key, in the order they are listed when dumping a shop.
    pub const ALL: &'static [Self] = &[
        Self::UserProfile,
        Self::PurchaseHistory,
        Self::ReturnRequests,
        Self::Reviews,
        Self::SupportTickets,
        Self::Wishlist,
        Self::UserRole,
    ];

    /// The document's storage name, also used as its file stem on disk.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserProfile => "userProfile",
            Self::PurchaseHistory => "purchaseHistory",
            Self::ReturnRequests => "returnRequests",
            Self::Reviews => "reviews",
            Self::SupportTickets => "supportTickets",
            Self::Wishlist => "wishlist",
            Self::UserRole => "userRole",
        }
    }
}

impl std::fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DocumentKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown document: {s}"))
    }
}

/// Storage backend for a shop's JSON documents.
///
/// Reads return `Ok(None)` for documents that were never written; the
/// records layer supplies defaults. Writes replace the whole document.
pub trait DocumentStore {
    /// Read a document, or `None` if it has never been written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails or the stored bytes are
    /// not valid JSON.
    fn read(&self, key: DocumentKey) -> Result<Option<JsonValue>, StoreError>;

    /// Write a document, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails to persist the value.
    fn write(&mut self, key: DocumentKey, value: &JsonValue) -> Result<(), StoreError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_match_stored_documents() {
        assert_eq!(DocumentKey::UserProfile.as_str(), "userProfile");
        assert_eq!(DocumentKey::PurchaseHistory.as_str(), "purchaseHistory");
        assert_eq!(DocumentKey::UserRole.as_str(), "userRole");
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        let key: DocumentKey = "purchasehistory".parse().unwrap();
        assert_eq!(key, DocumentKey::PurchaseHistory);
        assert!("ordersLog".parse::<DocumentKey>().is_err());
    }

    #[test]
    fn test_all_covers_every_name_once() {
        let mut names: Vec<&str> = DocumentKey::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DocumentKey::ALL.len());
    }
}
