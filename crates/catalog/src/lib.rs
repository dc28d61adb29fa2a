//! Bibliographic records (authors, publishers, genres, books).
//!
//! This crate contains the value records and the `Book` entity, implemented
//! purely as deterministic domain data (no IO, no HTTP, no storage).

pub mod author;
pub mod book;
pub mod genre;
pub mod publisher;

pub use author::Author;
pub use book::{Book, Isbn};
pub use genre::Genre;
pub use publisher::Publisher;
