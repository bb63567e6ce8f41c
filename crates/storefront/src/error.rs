//! Unified error handling for the storefront engine.
//!
//! Every fallible session operation returns `Result<T, StorefrontError>`.
//! Validation failures are separated from storage failures so callers can
//! tell "fix your input" apart from "the shop's documents are in trouble".

use thiserror::Error;

use acel_core::{Capability, EmailError, OrderId, ReturnRequestId, Role, TicketId};

use crate::store::StoreError;

/// Input problems caught before any document is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Purchase attempted with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Purchase attempted with a blank shipping address.
    #[error("shipping address cannot be blank")]
    BlankShippingAddress,

    /// Voucher code is not recognized.
    #[error("unknown voucher code: {0}")]
    UnknownVoucher(String),

    /// Review rating outside 1-5.
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),

    /// Review submitted with an empty comment.
    #[error("review comment cannot be empty")]
    EmptyComment,

    /// Return requested without a reason.
    #[error("return reason cannot be blank")]
    BlankReturnReason,

    /// A required field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// An email field failed to parse.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Application-level error type for the storefront engine.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Input was rejected; no document changed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Reading or writing a stored document failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The active role may not perform this operation.
    #[error("the {role} role may not {capability}")]
    Forbidden {
        /// Role that attempted the operation.
        role: Role,
        /// Capability the operation requires.
        capability: Capability,
    },

    /// No order with this ID in the shop's order list.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// No return request with this ID.
    #[error("Return request not found: {0}")]
    ReturnNotFound(ReturnRequestId),

    /// No support ticket with this ID.
    #[error("Ticket not found: {0}")]
    TicketNotFound(TicketId),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
