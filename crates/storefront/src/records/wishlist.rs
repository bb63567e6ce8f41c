//! The `wishlist` document: saved product IDs.

use acel_core::ProductId;

use crate::store::{DocumentKey, DocumentStore, StoreError};

/// Load the wishlist, oldest entry first.
///
/// # Errors
///
/// Returns `StoreError` only for I/O failures; a missing or corrupt
/// document yields an empty list.
pub fn load<S: DocumentStore + ?Sized>(store: &S) -> Result<Vec<ProductId>, StoreError> {
    super::load_or(store, DocumentKey::Wishlist, Vec::new)
}

/// Replace the whole wishlist.
///
/// # Errors
///
/// Returns `StoreError` if the document cannot be written.
pub fn save<S: DocumentStore + ?Sized>(
    store: &mut S,
    wishlist: &[ProductId],
) -> Result<(), StoreError> {
    super::save(store, DocumentKey::Wishlist, &wishlist)
}

/// Add a product to the wishlist. Returns `false` when it was already
/// saved; nothing is written in that case.
///
/// # Errors
///
/// Returns `StoreError` if the list cannot be read or written.
pub fn add<S: DocumentStore + ?Sized>(
    store: &mut S,
    product_id: ProductId,
) -> Result<bool, StoreError> {
    let mut wishlist = load(store)?;
    if wishlist.contains(&product_id) {
        return Ok(false);
    }
    wishlist.push(product_id);
    save(store, &wishlist)?;
    Ok(true)
}

/// Remove a product from the wishlist. Returns `false` when it was not
/// saved; nothing is written in that case.
///
/// # Errors
///
/// Returns `StoreError` if the list cannot be read or written.
pub fn remove<S: DocumentStore + ?Sized>(
    store: &mut S,
    product_id: ProductId,
) -> Result<bool, StoreError> {
    let mut wishlist = load(store)?;
    let before = wishlist.len();
    wishlist.retain(|saved| *saved != product_id);
    if wishlist.len() == before {
        return Ok(false);
    }
    save(store, &wishlist)?;
    Ok(true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_add_deduplicates() {
        let mut store = MemoryStore::new();
        assert!(add(&mut store, ProductId::new(3)).unwrap());
        assert!(!add(&mut store, ProductId::new(3)).unwrap());
        assert_eq!(load(&store).unwrap(), vec![ProductId::new(3)]);
    }

    #[test]
    fn test_remove() {
        let mut store = MemoryStore::new();
        add(&mut store, ProductId::new(3)).unwrap();
        add(&mut store, ProductId::new(4)).unwrap();

        assert!(remove(&mut store, ProductId::new(3)).unwrap());
        assert!(!remove(&mut store, ProductId::new(3)).unwrap());
        assert_eq!(load(&store).unwrap(), vec![ProductId::new(4)]);
    }
}
