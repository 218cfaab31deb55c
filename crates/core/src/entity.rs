//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are "the same" when their identifiers are equal, even if every
/// other attribute was replaced by an update.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `self` and `other` denote the same entity.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
