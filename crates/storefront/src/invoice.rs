//! Plain-text invoices for orders.
//!
//! The layout mirrors the invoice text customers have always downloaded
//! from this shop, down to the rule widths, so existing tooling that greps
//! these files keeps working.

use chrono::SecondsFormat;

use crate::types::Order;

const RULE_HEAVY: &str = "=====================================";
const RULE_LIGHT: &str = "-------------------------------------";

/// Render an order as a plain-text invoice.
#[must_use]
pub fn render(order: &Order) -> String {
    let date = order.date.to_rfc3339_opts(SecondsFormat::Millis, true);

    let mut out = format!(
        "\n{RULE_HEAVY}\n              INVOICE\n{RULE_HEAVY}\n\
         Order ID: #{}\nDate: {}\nCustomer: {}\nEmail: {}\n\n\
         ITEMS ORDERED:\n{RULE_LIGHT}",
        order.id, date, order.customer, order.email
    );

    for item in &order.items {
        let color = item.variant.as_ref().map_or("N/A", |v| v.as_str());
        out.push_str(&format!(
            "\n{}\n  Quantity: {}\n  Price: {}\n  Color: {}\n  Subtotal: {}",
            item.name,
            item.quantity,
            item.unit_price,
            color,
            item.line_total()
        ));
    }

    let address = if order.shipping_address.is_empty() {
        "N/A"
    } else {
        order.shipping_address.as_str()
    };
    out.push_str(&format!(
        "\n\n{RULE_LIGHT}\nSubtotal: {}\nDiscount: {}\nTotal: {}\n\n\
         Payment Method: {}\nShipping Address: {}\nStatus: {}\n\n\
         Thank you for your purchase!\n{RULE_HEAVY}",
        order.subtotal, order.discount, order.total, order.payment_method, address, order.status
    ));

    out
}

/// The file name an invoice is saved under.
#[must_use]
pub fn file_name(order: &Order) -> String {
    format!("Invoice_{}.txt", order.id)
}
