//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Stored records are keyed by their identifier; two records with the same
/// identifier are the same entity even when their other attributes differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
