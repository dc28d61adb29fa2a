//! The six standalone lending rules.
//!
//! Each rule consumes entities and in-memory collections directly; there is
//! no orchestration layer. All rules are pure predicates or filters except
//! [`return_book`], which mutates the reader's borrowed list in place.
//!
//! Every containment check below matches books by isbn alone, per the
//! [`Book`] equality contract.

use tracing::{debug, warn};

use shelfmark_catalog::{Author, Book};
use shelfmark_core::{DomainError, DomainResult};

use crate::library::Library;
use crate::reader::Reader;

/// Maximum number of books a reader may hold at once.
pub const BORROW_LIMIT: usize = 5;

/// True iff the reader holds at most [`BORROW_LIMIT`] books.
///
/// Total: any reader, including one with an empty list, is accepted.
pub fn check_books_limit(reader: &Reader) -> bool {
    reader.borrowed_books().len() <= BORROW_LIMIT
}

/// True iff no reader in `all_readers` currently holds this book.
///
/// Vacuously true for an empty reader slice. Exits on the first holder.
pub fn check_book_availability(book: &Book, all_readers: &[Reader]) -> bool {
    all_readers
        .iter()
        .all(|reader| !reader.borrowed_books().contains(book))
}

/// True iff the book is not already present in the library's stock.
pub fn check_unique_book(book: &Book, library: &Library) -> bool {
    !library.books().contains(book)
}

/// True iff the reader's name is non-empty.
pub fn check_user_name(reader: &Reader) -> bool {
    !reader.name().is_empty()
}

/// Every book in `all_books` written by `author`, preserving input order.
///
/// Author equality is field-wise (value-record equality), not id-only.
/// Returns borrowed references; `all_books` is never mutated.
pub fn search_books_by_author<'a>(author: &Author, all_books: &'a [Book]) -> Vec<&'a Book> {
    all_books
        .iter()
        .filter(|book| book.author() == author)
        .collect()
}

/// Remove one isbn-matching entry from the reader's borrowed list.
///
/// Errors with [`DomainError::NotFound`] when the reader does not hold the
/// book; the borrowed list is left untouched in that case. A removal request
/// for an absent book is an error, not a silent no-op.
pub fn return_book(reader: &mut Reader, book: &Book) -> DomainResult<()> {
    let position = reader
        .borrowed_books()
        .iter()
        .position(|borrowed| borrowed == book);

    match position {
        Some(index) => {
            reader.borrowed_books_mut().remove(index);
            debug!(reader_id = %reader.id(), isbn = %book.isbn(), "book returned");
            Ok(())
        }
        None => {
            warn!(reader_id = %reader.id(), isbn = %book.isbn(), "return of a book not on loan");
            Err(DomainError::not_found())
        }
    }
}
