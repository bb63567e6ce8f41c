//! Acel Market storefront engine.
//!
//! Everything a shop session needs lives in this crate: the product
//! [`catalog`], the [`cart`] ledger, [`pricing`] and [`checkout`], the
//! persistent document [`store`], and the per-customer account [`records`]
//! (profile, orders, returns, reviews, tickets, wishlist).
//!
//! The [`session::Session`] facade ties these together and is the intended
//! entry point; the other modules stay usable on their own for tests and
//! tools.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod invoice;
pub mod pricing;
pub mod records;
pub mod session;
pub mod store;
pub mod types;

pub use error::{Result, StorefrontError};
pub use session::{Session, TicketSubmission};
