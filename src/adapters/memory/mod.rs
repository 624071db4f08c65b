//! In-memory adapters.
//!
//! Back the resolver in tests and local runs without a database.

mod store;

pub use store::{InMemoryStore, StoreOperation, StoreSnapshot};
