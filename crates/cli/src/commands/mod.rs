//! CLI command implementations, one module per command.

pub mod demo;
pub mod invoice;
pub mod seed;
pub mod show;
