use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use shelfmark_core::Entity;

use crate::author::Author;
use crate::genre::Genre;
use crate::publisher::Publisher;

/// Isbn: the identity key for book equality and containment checks.
///
/// No format validation is applied; any non-empty (or even empty) text is
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Isbn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for Isbn {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Isbn {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A book record. Fields are fixed after construction; there are no setters.
///
/// ## Equality contract
///
/// `Book` equality is **isbn-only**, not structural: two books with the same
/// isbn but different titles, authors or years compare equal and are
/// interchangeable in every containment check. This mirrors the identity rule
/// of the system this models; see the `PartialEq` impl below. Do not mistake
/// it for field-wise equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    isbn: Isbn,
    title: String,
    publication_year: i32,
    author: Author,
    publisher: Publisher,
    genres: Vec<Genre>,
}

impl Book {
    pub fn new(
        isbn: impl Into<Isbn>,
        title: impl Into<String>,
        publication_year: i32,
        author: Author,
        publisher: Publisher,
        genres: Vec<Genre>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            publication_year,
            author,
            publisher,
            genres,
        }
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    /// Genres in the order they were given at construction.
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }
}

/// Isbn-only equality. Deliberate: identity for a book is its isbn alone.
impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

/// Hash must agree with the isbn-only `PartialEq`.
impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

impl Entity for Book {
    type Id = Isbn;

    fn id(&self) -> &Self::Id {
        &self.isbn
    }
}
