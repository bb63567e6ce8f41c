//! Reset the data directory to the guest baseline.
//!
//! Writes the guest profile and the `Customer` role, and replaces every
//! list document with an empty list. Existing documents are overwritten,
//! which makes this the "start over" command for demos.
//!
//! # Environment Variables
//!
//! - `ACEL_DATA_DIR` - Directory the documents are written to
//! - `ACEL_PRETTY_JSON` - Whether documents are pretty-printed

use acel_core::Role;
use acel_storefront::config::{ConfigError, StoreConfig};
use acel_storefront::records;
use acel_storefront::store::{FileStore, StoreError};
use acel_storefront::types::UserProfile;
use thiserror::Error;

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Environment configuration could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A document could not be written.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Write the baseline documents.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a document cannot
/// be written.
pub fn run() -> Result<(), SeedError> {
    let config = StoreConfig::from_env()?;
    let mut store = FileStore::open_with(&config)?;

    records::profile::save(&mut store, &UserProfile::guest())?;
    records::role::save(&mut store, Role::Customer)?;
    records::orders::save_all(&mut store, &[])?;
    records::returns::save_all(&mut store, &[])?;
    records::reviews::save_all(&mut store, &[])?;
    records::tickets::save_all(&mut store, &[])?;
    records::wishlist::save(&mut store, &[])?;

    tracing::info!(
        dir = %config.data_dir.display(),
        "Baseline documents written"
    );
    Ok(())
}
