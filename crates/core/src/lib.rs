//! Acel Core - Shared domain types.
//!
//! This crate provides common types used across all Acel Market components:
//! - `storefront` - The storefront engine (catalog, cart, checkout, records)
//! - `cli` - Command-line tools for seeding and inspecting a shop
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no session
//! state. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, emails, statuses,
//!   roles, and categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
