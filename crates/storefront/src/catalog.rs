//! The product catalog.
//!
//! The catalog lives in memory: it is seeded on startup and products added
//! during a session last until the session ends. Orders snapshot the lines
//! they need, so nothing in the stored documents depends on the catalog
//! still being around.

use acel_core::{Category, Money, ProductId};

use crate::types::Product;

/// Fields for a product about to be added to the catalog.
///
/// The ID is assigned by the caller (sessions take it from their reference
/// sequence), so this struct carries everything but.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Category used for browsing filters.
    pub category: Category,
    /// Unit price.
    pub price: Money,
    /// Units available.
    pub stock: u32,
    /// Optional image URL.
    pub image: Option<String>,
    /// Long-form description.
    pub details: String,
}

/// An in-memory product catalog.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// An empty catalog.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// The demo catalog every shop starts with: a couple of products in
    /// each browsing category, IDs numbered from 1.
    #[must_use]
    pub fn seeded() -> Self {
        let products = vec![
            seed(1, "Adobo Flakes Jar", "Food", 180, 24,
                "Crispy adobo flakes in a resealable jar. Great over garlic rice."),
            seed(2, "Garlic Longganisa Pack", "Food", 220, 18,
                "Half a kilo of skinless garlic longganisa, frozen for freshness."),
            seed(3, "Classic Tee", "Clothes", 500, 12,
                "Heavyweight cotton tee with a relaxed fit."),
            seed(4, "Zip Hoodie", "Clothes", 950, 8,
                "Fleece-lined hoodie with a two-way zipper."),
            seed(5, "Calamansi Juice Bottle", "Drinks", 95, 30,
                "Cold-pressed calamansi juice, lightly sweetened."),
            seed(6, "Barako Coffee Beans", "Drinks", 350, 15,
                "Whole barako beans from Batangas, medium roast."),
            seed(7, "Banana Chips", "Snacks", 85, 40,
                "Honey-glazed banana chips, 200 gram pouch."),
            seed(8, "Polvoron Box", "Snacks", 150, 25,
                "Assorted polvoron: classic, cookies and cream, and pinipig."),
            seed(9, "Wireless Earbuds", "Gadgets", 1800, 10,
                "Bluetooth 5.3 earbuds with a pocket charging case."),
            seed(10, "Power Bank 10000mAh", "Gadgets", 999, 14,
                "Slim dual-port power bank with pass-through charging."),
        ];
        Self { products }
    }

    /// Every product, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Add a fully-formed product. The caller is responsible for a unique ID.
    pub fn insert(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Products whose name contains `query` (case-insensitive) and, when a
    /// category is given, whose category matches it (also case-insensitive).
    ///
    /// An empty query matches every name; `None` for the category means no
    /// category filter, which is how the "All" tab behaves.
    #[must_use]
    pub fn search(&self, query: &str, category: Option<&Category>) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .filter(|product| category.is_none_or(|wanted| product.category.matches(wanted)))
            .collect()
    }
}

fn seed(id: i64, name: &str, category: &str, pesos: i64, stock: u32, details: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        category: Category::from(category),
        price: Money::from_pesos(pesos),
        stock,
        image: None,
        details: details.to_owned(),
        features: Vec::new(),
    }
}
