//! Entity trait: identity that survives state changes.

use std::fmt::Display;
use std::hash::Hash;

/// An aggregate with a stable identifier
///
/// The storage boundary keys every entity by [`Entity::id`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Strongly-typed identifier
    type Id: Copy + Eq + Hash + Display + Send + Sync + 'static;

    /// Short name used in log lines and error messages
    const KIND: &'static str;

    /// Returns the entity identifier
    fn id(&self) -> Self::Id;
}
