//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email address cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("email address must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input does not contain an @ symbol.
    #[error("email address must contain an @ symbol")]
    MissingAtSymbol,
    /// The local part (before @) is empty.
    #[error("email address has nothing before the @ symbol")]
    EmptyLocalPart,
    /// The domain part (after @) is empty.
    #[error("email address has nothing after the @ symbol")]
    EmptyDomain,
}

/// An email address.
///
/// Profiles, orders, and support tickets all carry an email; this type
/// ensures the value at least has a local part and domain separated by an
/// @ symbol before it reaches a stored document.
///
/// ## Constraints
///
/// - Length: 1-254 characters (RFC 5321 limit)
/// - Must contain an @ symbol
/// - Local part (before @) must not be empty
/// - Domain part (after @) must not be empty
///
/// ## Examples
///
/// ```
/// use acel_core::Email;
///
/// // Valid emails
/// assert!(Email::parse("guest@example.com").is_ok());
/// assert!(Email::parse("user.name+tag@domain.co.uk").is_ok());
///
/// // Invalid emails
/// assert!(Email::parse("").is_err());             // empty
/// assert!(Email::parse("no-at-symbol").is_err()); // missing @
/// assert!(Email::parse("@domain.com").is_err());  // empty local part
/// assert!(Email::parse("user@").is_err());        // empty domain
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is longer than 254 characters
    /// - Does not contain an @ symbol
    /// - Has an empty local part or domain
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        if s.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        let (local, domain) = s.split_once('@').ok_or(EmailError::MissingAtSymbol)?;
        if local.is_empty() {
            return Err(EmailError::EmptyLocalPart);
        }
        if domain.is_empty() {
            return Err(EmailError::EmptyDomain);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ordinary_addresses() {
        for candidate in [
            "guest@example.com",
            "ana.reyes@acel.ph",
            "shopper+wishlist@mail.example.com",
            "a@b.c",
        ] {
            assert!(Email::parse(candidate).is_ok(), "{candidate} should parse");
        }
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(matches!(Email::parse(""), Err(EmailError::Empty)));
        assert!(matches!(
            Email::parse("just-a-name"),
            Err(EmailError::MissingAtSymbol)
        ));
        assert!(matches!(
            Email::parse("@acel.ph"),
            Err(EmailError::EmptyLocalPart)
        ));
        assert!(matches!(
            Email::parse("ana@"),
            Err(EmailError::EmptyDomain)
        ));
    }

    #[test]
    fn test_rejects_addresses_over_the_length_limit() {
        let local = "a".repeat(Email::MAX_LENGTH);
        let candidate = format!("{local}@acel.ph");
        assert!(matches!(
            Email::parse(&candidate),
            Err(EmailError::TooLong { max }) if max == Email::MAX_LENGTH
        ));
    }

    #[test]
    fn test_second_at_symbol_lands_in_the_domain() {
        // Only the first @ splits local from domain
        assert!(Email::parse("ana@mail@acel.ph").is_ok());
    }

    #[test]
    fn test_display_prints_the_address_verbatim() {
        let email = Email::parse("guest@example.com").unwrap();
        assert_eq!(email.to_string(), "guest@example.com");
    }

    #[test]
    fn test_serializes_as_a_bare_json_string() {
        let email = Email::parse("guest@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"guest@example.com\"");

        let parsed: Email = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, email);
    }

    #[test]
    fn test_parses_via_from_str() {
        let email: Email = "guest@example.com".parse().unwrap();
        assert_eq!(email.as_str(), "guest@example.com");
    }
}
