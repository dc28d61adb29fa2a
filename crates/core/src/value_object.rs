//! Value object trait: equality by value, not identity.
//!
//! Value objects are defined entirely by their attribute values. Two value
//! objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared field-wise**. The
/// bibliographic records (`Author`, `Publisher`, `Genre`) are value objects:
/// they carry an id field, but nothing in the domain mutates them after
/// construction and all comparisons (including the search-by-author rule)
/// use full structural equality.
///
/// Contrast with [`crate::Entity`], where two instances with the same id are
/// the same record even when their other fields differ.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Author {
///     id: AuthorId,
///     name: String,
///     country: String,
/// }
///
/// impl ValueObject for Author {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
