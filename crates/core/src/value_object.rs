//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Implementors are
/// expected to validate on construction, so that holding an instance is proof
/// the value satisfies its rules.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Example:
/// - `Amount(5)` is a value object
/// - `Item { name: ItemName("chair"), amount: Amount(5) }` is an entity keyed by its name
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Amount(u64);
///
/// impl ValueObject for Amount {}
///
/// assert_eq!(Amount(5), Amount(5));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
