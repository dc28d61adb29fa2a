use serde::{Deserialize, Serialize};

use shelfmark_catalog::Book;
use shelfmark_core::{Entity, LibraryId};

/// A library branch holding a mutable collection of books.
///
/// Equality is **id-only**: two `Library` values with the same id are the
/// same library regardless of name, address or current stock.
///
/// The `books` list is an owned growable sequence mutated through
/// [`Library::books_mut`] by whichever caller owns the value. Nothing here
/// enforces uniqueness at insertion time; the uniqueness rule only checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Library {
    id: LibraryId,
    name: String,
    address: String,
    books: Vec<Book>,
}

impl Library {
    /// Create a library with an empty book list.
    pub fn new(id: LibraryId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::with_books(id, name, address, Vec::new())
    }

    /// Create a library with an initial stock.
    pub fn with_books(
        id: LibraryId,
        name: impl Into<String>,
        address: impl Into<String>,
        books: Vec<Book>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            books,
        }
    }

    pub fn id(&self) -> LibraryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Mutable access to the stock. Callers sharing a library across threads
    /// are responsible for synchronizing this access.
    pub fn books_mut(&mut self) -> &mut Vec<Book> {
        &mut self.books
    }
}

/// Id-only equality: consistent with the `Entity` identity contract.
impl PartialEq for Library {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Library {}

impl Entity for Library {
    type Id = LibraryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
