//! Adapters implementing the domain ports.

pub mod crypto;
pub mod memory;
