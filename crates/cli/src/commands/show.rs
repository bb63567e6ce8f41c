//! Inspect the stored shop documents.
//!
//! Each function dumps one document (or, for `documents`, an overview of
//! all of them) from the configured data directory.

use acel_storefront::config::{ConfigError, StoreConfig};
use acel_storefront::records;
use acel_storefront::store::{DocumentKey, DocumentStore, FileStore, StoreError};
use thiserror::Error;

/// Errors that can occur while reading documents.
#[derive(Debug, Error)]
pub enum ShowError {
    /// Environment configuration could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A document could not be read.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

fn open() -> Result<FileStore, ShowError> {
    let config = StoreConfig::from_env()?;
    Ok(FileStore::open_with(&config)?)
}

/// List which documents exist and their serialized size.
///
/// # Errors
///
/// Returns an error if a document cannot be read.
pub fn documents() -> Result<(), ShowError> {
    let store = open()?;
    for &key in DocumentKey::ALL {
        match store.read(key)? {
            Some(value) => {
                tracing::info!("{key}: {} bytes", value.to_string().len());
            }
            None => tracing::info!("{key}: (absent)"),
        }
    }
    Ok(())
}

/// Dump the shop-wide order list.
///
/// # Errors
///
/// Returns an error if the order list cannot be read.
pub fn orders() -> Result<(), ShowError> {
    let store = open()?;
    let orders = records::orders::load_all(&store)?;
    if orders.is_empty() {
        tracing::info!("No orders recorded");
        return Ok(());
    }

    for order in &orders {
        tracing::info!(
            "#{}  {}  {}  {} line(s)  {}",
            order.id,
            order.date.format("%Y-%m-%d"),
            order.status,
            order.items.len(),
            order.total,
        );
    }
    Ok(())
}

/// Dump the account profile.
///
/// # Errors
///
/// Returns an error if the profile cannot be read.
pub fn profile() -> Result<(), ShowError> {
    let store = open()?;
    let profile = records::profile::load(&store)?;

    tracing::info!("Name:   {}", profile.name);
    tracing::info!("Email:  {}", profile.email);
    tracing::info!("Role:   {}", profile.role);
    tracing::info!(
        "Orders: {} ({} spent)",
        profile.order_count(),
        profile.total_spent()
    );
    tracing::info!(
        "Newsletter: {}, Notifications: {}",
        profile.preferences.newsletter,
        profile.preferences.notifications
    );
    Ok(())
}

/// Dump the return requests.
///
/// # Errors
///
/// Returns an error if the request list cannot be read.
pub fn returns() -> Result<(), ShowError> {
    let store = open()?;
    let requests = records::returns::load_all(&store)?;
    if requests.is_empty() {
        tracing::info!("No return requests");
        return Ok(());
    }

    for request in &requests {
        tracing::info!(
            "#{}  order #{}  {}  \"{}\"",
            request.id,
            request.order_id,
            request.status,
            request.reason,
        );
        if let Some(refund) = request.refund_amount {
            tracing::info!("    refund {refund}");
        }
    }
    Ok(())
}

/// Dump the product reviews.
///
/// # Errors
///
/// Returns an error if the review list cannot be read.
pub fn reviews() -> Result<(), ShowError> {
    let store = open()?;
    let reviews = records::reviews::load_all(&store)?;
    if reviews.is_empty() {
        tracing::info!("No reviews posted");
        return Ok(());
    }

    for review in &reviews {
        tracing::info!(
            "product #{}  {}/5 by {}: {}",
            review.product_id,
            review.rating,
            review.name,
            review.comment,
        );
    }
    Ok(())
}

/// Dump the support tickets.
///
/// # Errors
///
/// Returns an error if the ticket list cannot be read.
pub fn tickets() -> Result<(), ShowError> {
    let store = open()?;
    let tickets = records::tickets::load_all(&store)?;
    if tickets.is_empty() {
        tracing::info!("No support tickets");
        return Ok(());
    }

    for ticket in &tickets {
        tracing::info!(
            "#{}  [{}] [{}]  {}  from {}",
            ticket.id,
            ticket.status,
            ticket.priority,
            ticket.subject,
            ticket.name,
        );
        if let Some(response) = &ticket.response {
            tracing::info!("    response: {response}");
        }
    }
    Ok(())
}

/// Dump the wishlisted product IDs.
///
/// # Errors
///
/// Returns an error if the wishlist cannot be read.
pub fn wishlist() -> Result<(), ShowError> {
    let store = open()?;
    let wishlist = records::wishlist::load(&store)?;
    if wishlist.is_empty() {
        tracing::info!("Wishlist is empty");
        return Ok(());
    }

    for product_id in wishlist {
        tracing::info!("Product #{product_id}");
    }
    Ok(())
}

/// Dump the active role and what it may do.
///
/// # Errors
///
/// Returns an error if the role document cannot be read.
pub fn role() -> Result<(), ShowError> {
    let store = open()?;
    let role = records::role::load(&store)?;

    tracing::info!("Active role: {role}");
    for capability in role.capabilities() {
        tracing::info!("  can {capability}");
    }
    Ok(())
}
