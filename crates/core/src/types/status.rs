//! Status enums for orders, returns, and support tickets.
//!
//! Every enum here serializes to the exact strings used in stored documents
//! (`"Pending"`, `"In Progress"`, `"Credit Card"`, ...), so persisted shops
//! stay readable and hand-editable.

use serde::{Deserialize, Serialize};

/// Order fulfillment status.
///
/// New orders start as [`OrderStatus::Pending`]. Status changes are direct
/// overwrites; there is no enforced progression, so a `Delivered` order can
/// be moved back to `Shipped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Shipped => write!(f, "Shipped"),
            Self::Delivered => write!(f, "Delivered"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Review state of a return request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReturnStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ReturnStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Approved => write!(f, "Approved"),
            Self::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Workflow state of a support ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TicketStatus {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Resolved => write!(f, "Resolved"),
        }
    }
}

/// Urgency of a support ticket. New tickets default to `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TicketPriority {
    Low,
    #[default]
    Normal,
    High,
}

impl std::fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Normal => write!(f, "Normal"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Subject line categories for support tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketSubject {
    #[serde(rename = "Order Issue")]
    OrderIssue,
    #[serde(rename = "Shipping/Delivery")]
    ShippingDelivery,
    #[serde(rename = "Product Quality")]
    ProductQuality,
    #[serde(rename = "Refund Request")]
    RefundRequest,
    #[serde(rename = "Technical Issue")]
    TechnicalIssue,
    #[serde(rename = "Payment Issue")]
    PaymentIssue,
    Other,
}

impl std::fmt::Display for TicketSubject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OrderIssue => write!(f, "Order Issue"),
            Self::ShippingDelivery => write!(f, "Shipping/Delivery"),
            Self::ProductQuality => write!(f, "Product Quality"),
            Self::RefundRequest => write!(f, "Refund Request"),
            Self::TechnicalIssue => write!(f, "Technical Issue"),
            Self::PaymentIssue => write!(f, "Payment Issue"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// How an order was paid for. Defaults to `Credit Card` when unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "GCash")]
    Gcash,
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreditCard => write!(f, "Credit Card"),
            Self::DebitCard => write!(f, "Debit Card"),
            Self::Gcash => write!(f, "GCash"),
            Self::CashOnDelivery => write!(f, "Cash on Delivery"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "credit card" | "credit-card" => Ok(Self::CreditCard),
            "debit card" | "debit-card" => Ok(Self::DebitCard),
            "gcash" => Ok(Self::Gcash),
            "cash on delivery" | "cash-on-delivery" | "cod" => Ok(Self::CashOnDelivery),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}
