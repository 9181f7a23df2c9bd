//! In-memory adapters for the user and session store ports.
//!
//! These back development and testing; state lives for the lifetime of the
//! process only. A durable deployment swaps in its own adapters behind the
//! same ports.

mod session_store;
mod user_store;

pub use session_store::InMemorySessionStore;
pub use user_store::InMemoryUserStore;
