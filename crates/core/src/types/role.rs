//! User roles and the operations they gate.

use serde::{Deserialize, Serialize};

/// An operation that requires an elevated role.
///
/// Customer-facing operations (browsing, cart edits, checkout, reviews,
/// return requests, ticket submission) are open to everyone and have no
/// capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Add products to the catalog.
    ManageProducts,
    /// Overwrite the status of any order.
    UpdateOrderStatus,
    /// Approve or reject return requests.
    ProcessReturns,
    /// Respond to support tickets and change their status.
    RespondToTickets,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ManageProducts => write!(f, "manage products"),
            Self::UpdateOrderStatus => write!(f, "update order status"),
            Self::ProcessReturns => write!(f, "process returns"),
            Self::RespondToTickets => write!(f, "respond to tickets"),
        }
    }
}

/// Active user role with different permission levels.
///
/// The role is part of the session's profile and can be switched at any
/// time; gated operations check the active role at the moment of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Shop, review, request returns, and open tickets.
    #[default]
    Customer,
    /// Full access to every gated operation.
    Admin,
    /// Product and order management, including return processing.
    Manager,
    /// Product and order handling plus ticket responses.
    Staff,
}

impl Role {
    /// The capability set granted to this role.
    #[must_use]
    pub const fn capabilities(self) -> &'static [Capability] {
        match self {
            Self::Customer => &[],
            Self::Admin => &[
                Capability::ManageProducts,
                Capability::UpdateOrderStatus,
                Capability::ProcessReturns,
                Capability::RespondToTickets,
            ],
            Self::Manager => &[
                Capability::ManageProducts,
                Capability::UpdateOrderStatus,
                Capability::ProcessReturns,
            ],
            Self::Staff => &[
                Capability::ManageProducts,
                Capability::UpdateOrderStatus,
                Capability::RespondToTickets,
            ],
        }
    }

    /// Whether this role may perform the given operation.
    #[must_use]
    pub fn can(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "Customer"),
            Self::Admin => write!(f, "Admin"),
            Self::Manager => write!(f, "Manager"),
            Self::Staff => write!(f, "Staff"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "customer" => Ok(Self::Customer),
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "staff" => Ok(Self::Staff),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
