//! Product categories and purchase variants.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A product category.
///
/// Categories are open-ended strings rather than a closed enum so shop
/// operators can introduce new ones without a release. Matching is
/// case-insensitive, so a filter for `"food"` finds products categorized
/// as `"Food"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Categories the seed catalog ships with.
    pub const KNOWN: &'static [&'static str] = &["Food", "Clothes", "Drinks", "Snacks", "Gadgets"];

    /// Create a category from a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The category name as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison with another category.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }

    /// Whether products in this category are bought in a variant
    /// (clothing is sold per color).
    #[must_use]
    pub fn has_variants(&self) -> bool {
        self.0.eq_ignore_ascii_case("Clothes")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// A per-line purchase variant, e.g. a selected clothing color.
///
/// Variants are compared exactly: `Black` and `black` are different cart
/// lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variant(String);

impl Variant {
    /// Create a variant from a value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The variant value as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_case_insensitive() {
        assert!(Category::new("Food").matches(&Category::new("food")));
        assert!(Category::new("CLOTHES").matches(&Category::new("Clothes")));
        assert!(!Category::new("Food").matches(&Category::new("Drinks")));
    }

    #[test]
    fn test_only_clothes_has_variants() {
        assert!(Category::new("Clothes").has_variants());
        assert!(Category::new("clothes").has_variants());
        assert!(!Category::new("Gadgets").has_variants());
    }

    #[test]
    fn test_variants_compare_exactly() {
        assert_ne!(Variant::new("Black"), Variant::new("black"));
        assert_eq!(Variant::new("Black"), Variant::new("Black"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&Category::new("Snacks")).unwrap();
        assert_eq!(json, "\"Snacks\"");

        let variant: Variant = serde_json::from_str("\"Navy\"").unwrap();
        assert_eq!(variant.as_str(), "Navy");
    }
}
