//! Core types for Acel Market.
//!
//! Type-safe wrappers for the values every shop document carries.

pub mod category;
pub mod email;
pub mod id;
pub mod money;
pub mod role;
pub mod status;

pub use category::{Category, Variant};
pub use email::{Email, EmailError};
pub use id::*;
pub use money::Money;
pub use role::{Capability, Role};
pub use status::*;
