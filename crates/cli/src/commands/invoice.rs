//! Render a stored order's invoice to a text file.

use std::fs;
use std::path::Path;

use acel_core::OrderId;
use acel_storefront::config::{ConfigError, StoreConfig};
use acel_storefront::store::{FileStore, StoreError};
use acel_storefront::{invoice, records};
use thiserror::Error;

/// Errors that can occur while rendering an invoice.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// Environment configuration could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The order list could not be read.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// No order has the given ID.
    #[error("No order found with ID {0}")]
    UnknownOrder(OrderId),

    /// The invoice file could not be written.
    #[error("Could not write the invoice: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the invoice for `order_id` into `out`, defaulting to the data
/// directory.
///
/// # Errors
///
/// Returns an error if the order cannot be found or the file cannot be
/// written.
pub fn write(order_id: OrderId, out: Option<&Path>) -> Result<(), InvoiceError> {
    let config = StoreConfig::from_env()?;
    let store = FileStore::open_with(&config)?;

    let orders = records::orders::load_all(&store)?;
    let order = orders
        .iter()
        .find(|order| order.id == order_id)
        .ok_or(InvoiceError::UnknownOrder(order_id))?;

    let dir = out.unwrap_or(&config.data_dir);
    fs::create_dir_all(dir)?;
    let path = dir.join(invoice::file_name(order));
    fs::write(&path, invoice::render(order))?;

    tracing::info!("Invoice for order #{order_id} written to {}", path.display());
    Ok(())
}
