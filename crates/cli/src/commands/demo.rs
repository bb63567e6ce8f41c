//! A scripted purchase against the configured data directory.
//!
//! Adds two Classic Tees to the cart, applies the welcome voucher, checks
//! out with GCash, and writes the invoice next to the stored documents.
//! Run `show orders` afterwards to see the result.

use std::fs;

use acel_core::{PaymentMethod, ProductId};
use acel_storefront::config::{ConfigError, StoreConfig};
use acel_storefront::invoice;
use acel_storefront::store::{FileStore, StoreError};
use acel_storefront::{Session, StorefrontError};
use thiserror::Error;

const DEMO_PRODUCT: i64 = 3;
const DEMO_QUANTITY: u32 = 2;
const DEMO_VOUCHER: &str = "ACEL";
const DEMO_ADDRESS: &str = "12 Mabini St, Quezon City";

/// Errors that can occur while running the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Environment configuration could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The data directory could not be opened.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A shop operation failed.
    #[error("Storefront error: {0}")]
    Storefront(#[from] StorefrontError),

    /// The seeded catalog is missing the demo product.
    #[error("Demo product {0} is not in the seeded catalog")]
    MissingProduct(i64),

    /// The invoice file could not be written.
    #[error("Could not write the invoice: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the scripted purchase.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the purchase is
/// rejected, or a document cannot be written.
pub fn run() -> Result<(), DemoError> {
    let config = StoreConfig::from_env()?;
    let store = FileStore::open_with(&config)?;
    let mut session = Session::new(store);

    let product = session
        .catalog()
        .get(ProductId::new(DEMO_PRODUCT))
        .cloned()
        .ok_or(DemoError::MissingProduct(DEMO_PRODUCT))?;

    tracing::info!(product = %product.name, quantity = DEMO_QUANTITY, "Adding to cart");
    session.add_to_cart(&product, DEMO_QUANTITY, None);

    if let Some(percent) = session.apply_voucher(DEMO_VOUCHER)? {
        tracing::info!(code = DEMO_VOUCHER, percent, "Voucher applied");
    }

    let quote = session.begin_checkout()?;
    tracing::info!(subtotal = %quote.subtotal, total = %quote.total, "Reviewing order");

    let receipt = session.purchase(PaymentMethod::Gcash, DEMO_ADDRESS)?;
    tracing::info!("Purchase complete!");
    tracing::info!("  Order:   #{}", receipt.id);
    tracing::info!("  Total:   {}", receipt.total);
    tracing::info!("  Status:  {}", receipt.status);

    let path = config.data_dir.join(invoice::file_name(receipt));
    fs::write(&path, invoice::render(receipt))?;
    tracing::info!("  Invoice: {}", path.display());

    session.complete_order();
    Ok(())
}
