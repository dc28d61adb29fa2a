use serde::{Deserialize, Serialize};

use shelfmark_catalog::Book;
use shelfmark_core::{Entity, ReaderId};

/// A registered reader holding a mutable list of borrowed books.
///
/// Equality is **id-only**, matching the `Entity` identity contract: a
/// reader stays the same reader as books are borrowed and returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reader {
    id: ReaderId,
    name: String,
    address: String,
    borrowed_books: Vec<Book>,
}

impl Reader {
    /// Create a reader with no borrowed books.
    pub fn new(id: ReaderId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::with_borrowed_books(id, name, address, Vec::new())
    }

    /// Create a reader already holding books.
    pub fn with_borrowed_books(
        id: ReaderId,
        name: impl Into<String>,
        address: impl Into<String>,
        borrowed_books: Vec<Book>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            borrowed_books,
        }
    }

    pub fn id(&self) -> ReaderId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn borrowed_books(&self) -> &[Book] {
        &self.borrowed_books
    }

    /// Mutable access to the borrowed list. Callers sharing a reader across
    /// threads are responsible for synchronizing this access; the
    /// [`crate::rules::return_book`] rule mutates through this list too.
    pub fn borrowed_books_mut(&mut self) -> &mut Vec<Book> {
        &mut self.borrowed_books
    }
}

/// Id-only equality: consistent with the `Entity` identity contract.
impl PartialEq for Reader {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Reader {}

impl Entity for Reader {
    type Id = ReaderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
