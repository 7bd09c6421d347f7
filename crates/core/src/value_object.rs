//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. A SKU
/// is a value object: two `"C5"` identifiers name the same product line. A
/// stock unit is an entity: two `"C5"` units are still distinct units.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
