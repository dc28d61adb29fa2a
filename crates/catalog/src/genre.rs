use serde::{Deserialize, Serialize};

use shelfmark_core::{GenreId, ValueObject};

/// Immutable value record for a genre.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    id: GenreId,
    name: String,
    description: String,
}

impl Genre {
    pub fn new(id: GenreId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn id(&self) -> GenreId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl ValueObject for Genre {}
