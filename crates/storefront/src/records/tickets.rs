//! The `supportTickets` document: customer support tickets.

use acel_core::TicketId;

use crate::store::{DocumentKey, DocumentStore, StoreError};
use crate::types::SupportTicket;

/// Load every ticket, oldest first.
///
/// # Errors
///
/// Returns `StoreError` only for I/O failures; a missing or corrupt
/// document yields an empty list.
pub fn load_all<S: DocumentStore + ?Sized>(store: &S) -> Result<Vec<SupportTicket>, StoreError> {
    super::load_or(store, DocumentKey::SupportTickets, Vec::new)
}

/// Replace the whole ticket list.
///
/// # Errors
///
/// Returns `StoreError` if the document cannot be written.
pub fn save_all<S: DocumentStore + ?Sized>(
    store: &mut S,
    tickets: &[SupportTicket],
) -> Result<(), StoreError> {
    super::save(store, DocumentKey::SupportTickets, &tickets)
}

/// Append one ticket to the list.
///
/// # Errors
///
/// Returns `StoreError` if the list cannot be read or written.
pub fn append<S: DocumentStore + ?Sized>(
    store: &mut S,
    ticket: &SupportTicket,
) -> Result<(), StoreError> {
    let mut tickets = load_all(store)?;
    tickets.push(ticket.clone());
    save_all(store, &tickets)
}

/// Delete one ticket. Returns `false` when no ticket has the given ID;
/// nothing is written in that case.
///
/// # Errors
///
/// Returns `StoreError` if the list cannot be read or written.
pub fn delete<S: DocumentStore + ?Sized>(
    store: &mut S,
    id: TicketId,
) -> Result<bool, StoreError> {
    let mut tickets = load_all(store)?;
    let before = tickets.len();
    tickets.retain(|ticket| ticket.id != id);
    if tickets.len() == before {
        return Ok(false);
    }
    save_all(store, &tickets)?;
    Ok(true)
}
