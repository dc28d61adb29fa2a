//! Entity trait: identity + continuity across state changes.
//!
//! An entity is the same record over time even as its fields change: a
//! `Reader` keeps its identity while its borrowed list grows and shrinks,
//! and a `Book` is identified by its isbn regardless of any other field.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
