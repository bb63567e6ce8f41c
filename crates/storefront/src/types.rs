//! Domain types for the storefront: products, cart lines, orders, and the
//! per-customer account records.
//!
//! Persisted types serialize with camelCase field names so the JSON
//! documents on disk keep the shape shops have always stored and stay
//! hand-editable.

use acel_core::{
    Category, Email, Money, OrderId, OrderStatus, PaymentMethod, ProductId, ReturnRequestId,
    ReturnStatus, ReviewId, Role, TicketId, TicketPriority, TicketStatus, TicketSubject, Variant,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ===== Catalog Types =====

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category used for browsing filters.
    pub category: Category,
    /// Unit price.
    pub price: Money,
    /// Units available. A cart line for this product is clamped to this.
    pub stock: u32,
    /// Image URL, if one was provided.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
    /// Long-form description shown on the product page.
    pub details: String,
    /// Bullet-point highlights.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub features: Vec<String>,
}

impl Product {
    /// Whether this product is bought in a variant (clothing colors).
    #[must_use]
    pub fn has_variants(&self) -> bool {
        self.category.has_variants()
    }
}

// ===== Cart Types =====

/// One line of a shopping cart: a product at a quantity, optionally in a
/// selected variant.
///
/// The line carries a copy of the product's name and unit price so an order
/// snapshot stays meaningful even after the catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line is for.
    #[serde(rename = "id")]
    pub product_id: ProductId,
    /// Product name at the time the line was added.
    pub name: String,
    /// Unit price at the time the line was added.
    #[serde(rename = "price")]
    pub unit_price: Money,
    /// Number of units.
    pub quantity: u32,
    /// Selected variant, present only for products sold in variants.
    #[serde(
        rename = "selectedColor",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub variant: Option<Variant>,
}

impl CartLine {
    /// The identity under which lines merge: same product and same variant.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product_id,
            variant: self.variant.clone(),
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// Identity of a cart line: the product plus its selected variant.
///
/// Two lines with the same product but different variants are distinct;
/// a line without a variant is distinct from every variant of the same
/// product.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    /// The product on the line.
    pub product_id: ProductId,
    /// The selected variant, if any.
    pub variant: Option<Variant>,
}

// ===== Order Types =====

/// A completed purchase.
///
/// Orders are immutable snapshots: the lines, prices, and totals are copied
/// out of the cart at purchase time. Only [`Order::status`] changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID from the reference sequence.
    pub id: OrderId,
    /// When the purchase completed.
    pub date: DateTime<Utc>,
    /// Customer name from the profile at purchase time.
    pub customer: String,
    /// Customer email from the profile at purchase time.
    pub email: Email,
    /// The purchased lines.
    pub items: Vec<CartLine>,
    /// Sum of line totals before discount.
    pub subtotal: Money,
    /// Voucher percentage applied, zero when none.
    pub discount_percent: Decimal,
    /// Peso amount taken off the subtotal.
    pub discount: Money,
    /// Amount charged: subtotal minus discount.
    pub total: Money,
    /// How the order was paid.
    pub payment_method: PaymentMethod,
    /// Free-form delivery address.
    pub shipping_address: String,
    /// Fulfillment status, starts as `Pending`.
    pub status: OrderStatus,
}

// ===== Profile Types =====

/// Customer communication preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Receive the newsletter.
    pub newsletter: bool,
    /// Receive order notifications.
    pub notifications: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            newsletter: true,
            notifications: true,
        }
    }
}

/// The account profile of the active user.
///
/// The profile keeps its own copy of the purchase history alongside the
/// shop-wide order list; both are written on every purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name, used as the customer name on new orders.
    pub name: String,
    /// Contact email, copied onto new orders.
    pub email: Email,
    /// Active role; gates management operations.
    #[serde(default)]
    pub role: Role,
    /// When the account was created.
    pub join_date: DateTime<Utc>,
    /// Orders placed by this account.
    #[serde(default)]
    pub purchase_history: Vec<Order>,
    /// Communication preferences.
    #[serde(default)]
    pub preferences: Preferences,
}

impl UserProfile {
    /// The fallback profile for a shop with no saved account.
    #[must_use]
    pub fn guest() -> Self {
        Self {
            name: "Guest User".to_owned(),
            email: Email::parse("guest@example.com").expect("guest email is valid"),
            role: Role::Customer,
            join_date: Utc::now(),
            purchase_history: Vec::new(),
            preferences: Preferences::default(),
        }
    }

    /// Total pesos spent across the purchase history.
    #[must_use]
    pub fn total_spent(&self) -> Money {
        self.purchase_history.iter().map(|order| order.total).sum()
    }

    /// Number of orders placed.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.purchase_history.len()
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::guest()
    }
}

// ===== Return Types =====

/// A customer request to return an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    /// Unique request ID from the reference sequence.
    pub id: ReturnRequestId,
    /// The order being returned.
    pub order_id: OrderId,
    /// Customer-stated reason.
    pub reason: String,
    /// Review state, starts as `Pending`.
    pub status: ReturnStatus,
    /// Snapshot of the order's lines at request time.
    pub items: Vec<CartLine>,
    /// When the request was filed.
    pub created_at: DateTime<Utc>,
    /// Refund granted on approval; absent until then.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub refund_amount: Option<Money>,
}

// ===== Review Types =====

/// A star rating with an optional display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review ID from the reference sequence.
    pub id: ReviewId,
    /// The reviewed product.
    pub product_id: ProductId,
    /// Stars, 1 through 5.
    pub rating: u8,
    /// Review text; never empty.
    pub comment: String,
    /// Reviewer display name, `Anonymous` when left blank.
    pub name: String,
    /// When the review was posted.
    pub date: DateTime<Utc>,
}

// ===== Support Types =====

/// A customer support ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    /// Unique ticket ID from the reference sequence.
    pub id: TicketId,
    /// Submitter name.
    pub name: String,
    /// Submitter contact email.
    pub email: Email,
    /// Optional phone number.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    /// What the ticket is about.
    pub subject: TicketSubject,
    /// Ticket body.
    pub message: String,
    /// Workflow state, starts as `Open`.
    pub status: TicketStatus,
    /// Urgency, defaults to `Normal`.
    pub priority: TicketPriority,
    /// When the ticket was submitted.
    pub created_at: DateTime<Utc>,
    /// Staff response; absent until someone answers.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub response: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tee_line() -> CartLine {
        CartLine {
            product_id: ProductId::new(3),
            name: "Tee".to_owned(),
            unit_price: Money::from_pesos(500),
            quantity: 2,
            variant: Some(Variant::new("Black")),
        }
    }

    #[test]
    fn test_cart_line_wire_shape() {
        let value = serde_json::to_value(tee_line()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "name": "Tee",
                "price": "500",
                "quantity": 2,
                "selectedColor": "Black"
            })
        );
    }

    #[test]
    fn test_cart_line_without_variant_omits_selected_color() {
        let line = CartLine {
            variant: None,
            ..tee_line()
        };
        let value = serde_json::to_value(line).unwrap();
        assert!(value.get("selectedColor").is_none());
    }

    #[test]
    fn test_line_key_distinguishes_variants() {
        let black = tee_line();
        let navy = CartLine {
            variant: Some(Variant::new("Navy")),
            ..tee_line()
        };
        let plain = CartLine {
            variant: None,
            ..tee_line()
        };

        assert_eq!(black.key(), tee_line().key());
        assert_ne!(black.key(), navy.key());
        assert_ne!(black.key(), plain.key());
    }

    #[test]
    fn test_line_total() {
        assert_eq!(tee_line().line_total(), Money::from_pesos(1000));
    }

    #[test]
    fn test_guest_profile_defaults() {
        let profile = UserProfile::guest();
        assert_eq!(profile.name, "Guest User");
        assert_eq!(profile.email.as_str(), "guest@example.com");
        assert_eq!(profile.role, Role::Customer);
        assert!(profile.purchase_history.is_empty());
        assert!(profile.preferences.newsletter);
        assert!(profile.preferences.notifications);
        assert_eq!(profile.total_spent(), Money::ZERO);
    }

    #[test]
    fn test_profile_deserializes_with_missing_optional_fields() {
        // Older documents may predate roles and preferences
        let profile: UserProfile = serde_json::from_value(json!({
            "name": "Guest User",
            "email": "guest@example.com",
            "joinDate": "2026-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(profile.role, Role::Customer);
        assert_eq!(profile.preferences, Preferences::default());
        assert!(profile.purchase_history.is_empty());
    }

    #[test]
    fn test_order_roundtrip_keeps_camel_case_keys() {
        let order = Order {
            id: OrderId::new(1_756_100_000_000),
            date: Utc::now(),
            customer: "Guest User".to_owned(),
            email: Email::parse("guest@example.com").unwrap(),
            items: vec![tee_line()],
            subtotal: Money::from_pesos(1000),
            discount_percent: Decimal::from(10),
            discount: Money::from_pesos(100),
            total: Money::from_pesos(900),
            payment_method: PaymentMethod::Gcash,
            shipping_address: "12 Mabini St".to_owned(),
            status: OrderStatus::Pending,
        };

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["paymentMethod"], json!("GCash"));
        assert_eq!(value["shippingAddress"], json!("12 Mabini St"));
        assert_eq!(value["discountPercent"], json!("10"));
        assert_eq!(value["total"], json!("900"));

        let back: Order = serde_json::from_value(value).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_return_request_omits_refund_until_granted() {
        let request = ReturnRequest {
            id: ReturnRequestId::new(2),
            order_id: OrderId::new(1),
            reason: "Product issue".to_owned(),
            status: ReturnStatus::Pending,
            items: vec![tee_line()],
            created_at: Utc::now(),
            refund_amount: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("refundAmount").is_none());
        assert_eq!(value["orderId"], json!(1));
    }

    #[test]
    fn test_ticket_wire_shape() {
        let ticket = SupportTicket {
            id: TicketId::new(9),
            name: "Ana".to_owned(),
            email: Email::parse("ana@example.com").unwrap(),
            phone: None,
            subject: TicketSubject::OrderIssue,
            message: "Where is my order?".to_owned(),
            status: TicketStatus::Open,
            priority: TicketPriority::Normal,
            created_at: Utc::now(),
            response: None,
        };
        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(value["subject"], json!("Order Issue"));
        assert_eq!(value["status"], json!("Open"));
        assert_eq!(value["priority"], json!("Normal"));
        assert!(value.get("response").is_none());
        assert!(value.get("phone").is_none());
    }
}
