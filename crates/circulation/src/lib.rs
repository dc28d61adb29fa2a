//! Circulation domain module (libraries, readers, lending rules).
//!
//! This crate contains the mutable aggregates (`Library`, `Reader`) and the
//! six standalone business-rule functions, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod library;
pub mod reader;
pub mod rules;

pub use library::Library;
pub use reader::Reader;
pub use rules::{
    BORROW_LIMIT, check_book_availability, check_books_limit, check_unique_book, check_user_name,
    return_book, search_books_by_author,
};
