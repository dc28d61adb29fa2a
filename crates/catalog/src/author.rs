use serde::{Deserialize, Serialize};

use shelfmark_core::{AuthorId, ValueObject};

/// Immutable value record for an author.
///
/// Compared field-wise: two `Author` values are equal only when id, name and
/// country all match. The search-by-author rule relies on this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    name: String,
    country: String,
}

impl Author {
    pub fn new(id: AuthorId, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            country: country.into(),
        }
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl ValueObject for Author {}
