//! The shop session: one customer's view of the whole storefront.
//!
//! A [`Session`] owns the document store, the in-memory catalog, and the
//! cart, and exposes every operation the shop supports. Validation and role
//! gating happen here; the modules underneath stay policy-free.

use acel_core::{
    Capability, Category, OrderId, OrderStatus, PaymentMethod, ProductId, ReturnRequestId,
    ReturnStatus, ReviewId, Role, TicketId, TicketPriority, TicketStatus, TicketSubject, Variant,
};
use chrono::Utc;
use rust_decimal::Decimal;

use crate::cart::CartLedger;
use crate::catalog::{Catalog, NewProduct};
use crate::checkout::{self, CheckoutStage, ReferenceSequence};
use crate::error::{Result, StorefrontError, ValidationError};
use crate::pricing::{self, Quote};
use crate::records;
use crate::store::DocumentStore;
use crate::types::{
    CartLine, LineKey, Order, Preferences, Product, ReturnRequest, Review, SupportTicket,
    UserProfile,
};

/// Color assigned when a clothing product is added without an explicit
/// selection.
const DEFAULT_VARIANT: &str = "Black";

/// Fields a customer submits for a new support ticket.
#[derive(Debug, Clone)]
pub struct TicketSubmission {
    /// Submitter name. Required.
    pub name: String,
    /// Contact email. Required, validated.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// What the ticket is about.
    pub subject: TicketSubject,
    /// Ticket body. Required.
    pub message: String,
}

/// A live shop session over a document store.
pub struct Session<S> {
    store: S,
    catalog: Catalog,
    cart: CartLedger,
    stage: CheckoutStage,
    voucher: Option<String>,
    sequence: ReferenceSequence,
    last_receipt: Option<Order>,
}

impl<S: DocumentStore> Session<S> {
    /// Open a session with the seeded demo catalog.
    pub fn new(store: S) -> Self {
        Self::with_catalog(store, Catalog::seeded())
    }

    /// Open a session over a specific catalog.
    pub fn with_catalog(store: S, catalog: Catalog) -> Self {
        Self {
            store,
            catalog,
            cart: CartLedger::new(),
            stage: CheckoutStage::default(),
            voucher: None,
            sequence: ReferenceSequence::new(),
            last_receipt: None,
        }
    }

    /// The underlying document store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Where the session is in the shopping flow.
    #[must_use]
    pub const fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// The voucher code currently applied, if any.
    #[must_use]
    pub fn voucher(&self) -> Option<&str> {
        self.voucher.as_deref()
    }

    /// The receipt of the purchase just completed, until
    /// [`Session::complete_order`] clears it.
    #[must_use]
    pub fn last_receipt(&self) -> Option<&Order> {
        self.last_receipt.as_ref()
    }

    // ===== Catalog =====

    /// Products matching a name query and optional category filter.
    #[must_use]
    pub fn search_products(&self, query: &str, category: Option<&Category>) -> Vec<&Product> {
        self.catalog.search(query, category)
    }

    /// Add a product to the catalog. Requires the manage-products
    /// capability.
    ///
    /// The product exists for the life of the session; the catalog is not
    /// persisted.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` for roles without the capability, or a
    /// validation error for a blank name.
    pub fn add_product(&mut self, new: NewProduct) -> Result<ProductId> {
        self.require(Capability::ManageProducts)?;
        if new.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }

        let id = ProductId::new(self.sequence.next());
        self.catalog.insert(Product {
            id,
            name: new.name,
            category: new.category,
            price: new.price,
            stock: new.stock,
            image: new.image,
            details: new.details,
            features: Vec::new(),
        });
        tracing::info!(product = %id, "Product added to catalog");
        Ok(id)
    }

    // ===== Cart =====

    /// The cart lines as they stand.
    #[must_use]
    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Add a product to the cart.
    ///
    /// Clothing without an explicit color selection gets the default color;
    /// variants on non-clothing products are dropped. Quantities clamp to
    /// what is in stock.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32, variant: Option<Variant>) {
        let variant = if product.has_variants() {
            variant.or_else(|| Some(Variant::new(DEFAULT_VARIANT)))
        } else {
            None
        };
        self.cart.add_or_merge(product, quantity, variant);
    }

    /// Overwrite a line's quantity, with a floor of one. Returns `false`
    /// when no line has this key.
    pub fn update_cart_quantity(&mut self, key: &LineKey, quantity: u32) -> bool {
        self.cart.set_quantity(key, quantity.max(1))
    }

    /// Remove a line. Returns `false` when no line has this key.
    pub fn remove_from_cart(&mut self, key: &LineKey) -> bool {
        self.cart.remove(key)
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // ===== Pricing and checkout =====

    /// Price the cart under the applied voucher.
    #[must_use]
    pub fn quote(&self) -> Quote {
        pricing::price(self.cart.lines(), self.voucher.as_deref())
    }

    /// Apply a voucher code, returning its discount percentage.
    ///
    /// A blank code clears the voucher and returns `None`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownVoucher` for an unrecognized code; the session is
    /// left with no voucher applied.
    pub fn apply_voucher(&mut self, code: &str) -> Result<Option<u32>> {
        let code = code.trim();
        if code.is_empty() {
            self.voucher = None;
            return Ok(None);
        }

        match pricing::resolve_voucher(code) {
            Some(percent) => {
                self.voucher = Some(code.to_owned());
                Ok(Some(percent))
            }
            None => {
                self.voucher = None;
                Err(ValidationError::UnknownVoucher(code.to_owned()).into())
            }
        }
    }

    /// Move to the review stage and return the quote the customer is
    /// reviewing.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCart` when there is nothing to check out.
    pub fn begin_checkout(&mut self) -> Result<Quote> {
        if self.cart.is_empty() {
            return Err(ValidationError::EmptyCart.into());
        }
        self.stage = CheckoutStage::Reviewing;
        Ok(self.quote())
    }

    /// Complete the purchase: snapshot the cart into an order, persist it,
    /// and hold the receipt.
    ///
    /// Validation runs before anything is written; a failed purchase leaves
    /// the store, the cart, and the stage untouched. The cart is cleared
    /// only after the order is safely recorded.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCart` or `BlankShippingAddress` for bad input, or a
    /// store error if the order cannot be persisted.
    pub fn purchase(
        &mut self,
        payment_method: PaymentMethod,
        shipping_address: &str,
    ) -> Result<&Order> {
        if self.cart.is_empty() {
            return Err(ValidationError::EmptyCart.into());
        }
        if shipping_address.trim().is_empty() {
            return Err(ValidationError::BlankShippingAddress.into());
        }

        let quote = self.quote();
        let profile = records::profile::load(&self.store)?;

        let order = Order {
            id: OrderId::new(self.sequence.next()),
            date: Utc::now(),
            customer: profile.name,
            email: profile.email,
            items: self.cart.snapshot(),
            subtotal: quote.subtotal,
            discount_percent: quote.discount_percent,
            discount: quote.discount_amount,
            total: quote.total,
            payment_method,
            shipping_address: shipping_address.to_owned(),
            status: OrderStatus::Pending,
        };

        checkout::record_purchase(&mut self.store, &order)?;

        tracing::info!(order = %order.id, total = %order.total, "Purchase recorded");
        self.cart.clear();
        self.stage = CheckoutStage::Purchased;
        Ok(self.last_receipt.insert(order))
    }

    /// Acknowledge the receipt and return to shopping. Clears the voucher.
    pub fn complete_order(&mut self) {
        self.stage = CheckoutStage::Shopping;
        self.last_receipt = None;
        self.voucher = None;
    }

    // ===== Orders =====

    /// Every order in the shop, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a store error if the order list cannot be read.
    pub fn orders(&self) -> Result<Vec<Order>> {
        Ok(records::orders::load_all(&self.store)?)
    }

    /// Overwrite an order's status. Requires the update-order-status
    /// capability.
    ///
    /// Only the shop-wide order list changes; the copies embedded in the
    /// profile's purchase history keep the status they were recorded with.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` for roles without the capability, or
    /// `OrderNotFound` when no order has this ID.
    pub fn update_order_status(&mut self, id: OrderId, status: OrderStatus) -> Result<()> {
        self.require(Capability::UpdateOrderStatus)?;
        if !records::orders::set_status(&mut self.store, id, status)? {
            return Err(StorefrontError::OrderNotFound(id));
        }
        tracing::info!(order = %id, status = %status, "Order status updated");
        Ok(())
    }

    /// Render the plain-text invoice for an order.
    ///
    /// # Errors
    ///
    /// Returns `OrderNotFound` when no order has this ID.
    pub fn invoice(&self, id: OrderId) -> Result<String> {
        let orders = records::orders::load_all(&self.store)?;
        let order = orders
            .iter()
            .find(|order| order.id == id)
            .ok_or(StorefrontError::OrderNotFound(id))?;
        Ok(crate::invoice::render(order))
    }

    // ===== Returns =====

    /// Every return request, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a store error if the request list cannot be read.
    pub fn returns(&self) -> Result<Vec<ReturnRequest>> {
        Ok(records::returns::load_all(&self.store)?)
    }

    /// File a return request against an order.
    ///
    /// The request snapshots the order's lines and starts `Pending`. Any
    /// order can be returned regardless of its status.
    ///
    /// # Errors
    ///
    /// Returns `BlankReturnReason` for an empty reason or `OrderNotFound`
    /// when no order has this ID.
    pub fn request_return(&mut self, order_id: OrderId, reason: &str) -> Result<ReturnRequest> {
        if reason.trim().is_empty() {
            return Err(ValidationError::BlankReturnReason.into());
        }

        let orders = records::orders::load_all(&self.store)?;
        let order = orders
            .iter()
            .find(|order| order.id == order_id)
            .ok_or(StorefrontError::OrderNotFound(order_id))?;

        let request = ReturnRequest {
            id: ReturnRequestId::new(self.sequence.next()),
            order_id,
            reason: reason.to_owned(),
            status: ReturnStatus::Pending,
            items: order.items.clone(),
            created_at: Utc::now(),
            refund_amount: None,
        };
        records::returns::append(&mut self.store, &request)?;
        tracing::info!(request = %request.id, order = %order_id, "Return requested");
        Ok(request)
    }

    /// Approve a return request, granting a refund of its items' value.
    /// Requires the process-returns capability.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` for roles without the capability, or
    /// `ReturnNotFound` when no request has this ID.
    pub fn approve_return(&mut self, id: ReturnRequestId) -> Result<ReturnRequest> {
        self.review_return(id, ReturnStatus::Approved)
    }

    /// Reject a return request. Requires the process-returns capability.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` for roles without the capability, or
    /// `ReturnNotFound` when no request has this ID.
    pub fn reject_return(&mut self, id: ReturnRequestId) -> Result<ReturnRequest> {
        self.review_return(id, ReturnStatus::Rejected)
    }

    fn review_return(&mut self, id: ReturnRequestId, decision: ReturnStatus) -> Result<ReturnRequest> {
        self.require(Capability::ProcessReturns)?;

        let mut requests = records::returns::load_all(&self.store)?;
        let request = requests
            .iter_mut()
            .find(|request| request.id == id)
            .ok_or(StorefrontError::ReturnNotFound(id))?;

        request.status = decision;
        request.refund_amount = match decision {
            ReturnStatus::Approved => {
                Some(request.items.iter().map(CartLine::line_total).sum())
            }
            ReturnStatus::Pending | ReturnStatus::Rejected => None,
        };
        let reviewed = request.clone();

        records::returns::save_all(&mut self.store, &requests)?;
        tracing::info!(request = %id, decision = %decision, "Return reviewed");
        Ok(reviewed)
    }

    // ===== Reviews =====

    /// Post a review for a product.
    ///
    /// A blank reviewer name is stored as `Anonymous`.
    ///
    /// # Errors
    ///
    /// Returns `RatingOutOfRange` for ratings outside 1-5 or
    /// `EmptyComment` for a blank comment.
    pub fn submit_review(
        &mut self,
        product_id: ProductId,
        rating: u8,
        comment: &str,
        name: &str,
    ) -> Result<Review> {
        if !(1..=5).contains(&rating) {
            return Err(ValidationError::RatingOutOfRange(rating).into());
        }
        if comment.trim().is_empty() {
            return Err(ValidationError::EmptyComment.into());
        }

        let name = name.trim();
        let review = Review {
            id: ReviewId::new(self.sequence.next()),
            product_id,
            rating,
            comment: comment.to_owned(),
            name: if name.is_empty() {
                "Anonymous".to_owned()
            } else {
                name.to_owned()
            },
            date: Utc::now(),
        };
        records::reviews::append(&mut self.store, &review)?;
        Ok(review)
    }

    /// The reviews for one product, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a store error if the review list cannot be read.
    pub fn reviews_for(&self, product_id: ProductId) -> Result<Vec<Review>> {
        let mut reviews = records::reviews::load_all(&self.store)?;
        reviews.retain(|review| review.product_id == product_id);
        Ok(reviews)
    }

    /// Mean star rating for a product, rounded to one decimal.
    ///
    /// # Errors
    ///
    /// Returns a store error if the review list cannot be read.
    pub fn average_rating(&self, product_id: ProductId) -> Result<Option<Decimal>> {
        Ok(records::reviews::average_rating(&self.reviews_for(product_id)?))
    }

    // ===== Support tickets =====

    /// Every support ticket, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a store error if the ticket list cannot be read.
    pub fn tickets(&self) -> Result<Vec<SupportTicket>> {
        Ok(records::tickets::load_all(&self.store)?)
    }

    /// Submit a support ticket. New tickets open with normal priority and
    /// no response.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the name or message is blank or the
    /// email does not parse.
    pub fn submit_ticket(&mut self, submission: TicketSubmission) -> Result<SupportTicket> {
        if submission.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }
        if submission.message.trim().is_empty() {
            return Err(ValidationError::MissingField("message").into());
        }
        let email = submission
            .email
            .parse()
            .map_err(ValidationError::InvalidEmail)?;

        let ticket = SupportTicket {
            id: TicketId::new(self.sequence.next()),
            name: submission.name,
            email,
            phone: submission.phone,
            subject: submission.subject,
            message: submission.message,
            status: TicketStatus::Open,
            priority: TicketPriority::Normal,
            created_at: Utc::now(),
            response: None,
        };
        records::tickets::append(&mut self.store, &ticket)?;
        tracing::info!(ticket = %ticket.id, subject = %ticket.subject, "Ticket submitted");
        Ok(ticket)
    }

    /// Answer a ticket. Requires the respond-to-tickets capability.
    ///
    /// An open ticket moves to `In Progress` when answered; a resolved one
    /// keeps its status.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` for roles without the capability,
    /// `TicketNotFound` for an unknown ID, or a validation error for a
    /// blank response.
    pub fn respond_to_ticket(&mut self, id: TicketId, response: &str) -> Result<SupportTicket> {
        self.require(Capability::RespondToTickets)?;
        if response.trim().is_empty() {
            return Err(ValidationError::MissingField("response").into());
        }

        let mut tickets = records::tickets::load_all(&self.store)?;
        let ticket = tickets
            .iter_mut()
            .find(|ticket| ticket.id == id)
            .ok_or(StorefrontError::TicketNotFound(id))?;

        ticket.response = Some(response.to_owned());
        if ticket.status == TicketStatus::Open {
            ticket.status = TicketStatus::InProgress;
        }
        let answered = ticket.clone();

        records::tickets::save_all(&mut self.store, &tickets)?;
        Ok(answered)
    }

    /// Overwrite a ticket's status. Requires the respond-to-tickets
    /// capability.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` for roles without the capability or
    /// `TicketNotFound` for an unknown ID.
    pub fn set_ticket_status(&mut self, id: TicketId, status: TicketStatus) -> Result<()> {
        self.require(Capability::RespondToTickets)?;

        let mut tickets = records::tickets::load_all(&self.store)?;
        let ticket = tickets
            .iter_mut()
            .find(|ticket| ticket.id == id)
            .ok_or(StorefrontError::TicketNotFound(id))?;
        ticket.status = status;

        records::tickets::save_all(&mut self.store, &tickets)?;
        Ok(())
    }

    /// Delete a ticket. Customers may delete their own tickets, so this is
    /// not gated.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` when no ticket has this ID.
    pub fn delete_ticket(&mut self, id: TicketId) -> Result<()> {
        if !records::tickets::delete(&mut self.store, id)? {
            return Err(StorefrontError::TicketNotFound(id));
        }
        Ok(())
    }

    // ===== Wishlist =====

    /// The saved product IDs, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a store error if the wishlist cannot be read.
    pub fn wishlist(&self) -> Result<Vec<ProductId>> {
        Ok(records::wishlist::load(&self.store)?)
    }

    /// Flip a product's wishlist membership. Returns `true` when the
    /// product is now saved, `false` when the toggle removed it.
    ///
    /// # Errors
    ///
    /// Returns a store error if the wishlist cannot be read or written.
    pub fn toggle_wishlist(&mut self, product_id: ProductId) -> Result<bool> {
        if records::wishlist::add(&mut self.store, product_id)? {
            return Ok(true);
        }
        records::wishlist::remove(&mut self.store, product_id)?;
        Ok(false)
    }

    // ===== Profile and roles =====

    /// The active account profile.
    ///
    /// # Errors
    ///
    /// Returns a store error if the profile cannot be read.
    pub fn profile(&self) -> Result<UserProfile> {
        Ok(records::profile::load(&self.store)?)
    }

    /// Update the profile's name and email.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name or unparseable email,
    /// or a store error if the profile cannot be written.
    pub fn update_profile(&mut self, name: &str, email: &str) -> Result<UserProfile> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }
        let email = email.parse().map_err(ValidationError::InvalidEmail)?;

        let mut profile = records::profile::load(&self.store)?;
        profile.name = name.to_owned();
        profile.email = email;
        records::profile::save(&mut self.store, &profile)?;
        Ok(profile)
    }

    /// Overwrite the notification preferences.
    ///
    /// # Errors
    ///
    /// Returns a store error if the profile cannot be written.
    pub fn set_preferences(&mut self, preferences: Preferences) -> Result<UserProfile> {
        let mut profile = records::profile::load(&self.store)?;
        profile.preferences = preferences;
        records::profile::save(&mut self.store, &profile)?;
        Ok(profile)
    }

    /// The active role.
    ///
    /// # Errors
    ///
    /// Returns a store error if the role document cannot be read.
    pub fn active_role(&self) -> Result<Role> {
        Ok(records::role::load(&self.store)?)
    }

    /// Switch the active role. Not gated: a session may always reassign
    /// itself, and the demo tooling relies on that.
    ///
    /// # Errors
    ///
    /// Returns a store error if the role or profile cannot be written.
    pub fn switch_role(&mut self, role: Role) -> Result<()> {
        records::role::save(&mut self.store, role)?;

        let mut profile = records::profile::load(&self.store)?;
        profile.role = role;
        records::profile::save(&mut self.store, &profile)?;
        tracing::info!(role = %role, "Active role switched");
        Ok(())
    }

    fn require(&self, capability: Capability) -> Result<()> {
        let role = records::role::load(&self.store)?;
        if role.can(capability) {
            Ok(())
        } else {
            Err(StorefrontError::Forbidden { role, capability })
        }
    }
}
