//! Things with identity that outlive changes to their attributes.

/// Something tracked by identifier rather than by value.
///
/// Two stock units of the same SKU that arrived at the same instant are still
/// two units; their ids tell them apart.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;

    fn is_same_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
