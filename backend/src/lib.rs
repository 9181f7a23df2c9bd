//! Authentication and domain-validation subsystem for the relief
//! coordination backend.
//!
//! The crate is laid out hexagonally: [`domain`] holds the entities, the
//! validation engine, and the driving auth service together with the ports
//! it consumes; [`outbound`] holds the adapters that satisfy those ports
//! (in-memory stores and the Argon2 credential hasher). HTTP routing, view
//! rendering, and durable persistence are collaborators owned elsewhere and
//! talk to this crate exclusively through the port traits.

pub mod domain;
pub mod outbound;
