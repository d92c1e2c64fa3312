//! Storage boundary
//!
//! Entities are handed to and read from a store keyed by their identifier. The
//! store keeps whatever the entity already enforced and never re-validates.

pub mod memory;
pub mod traits;

pub use memory::InMemoryStore;
pub use traits::EntityStore;
