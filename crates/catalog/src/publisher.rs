use serde::{Deserialize, Serialize};

use shelfmark_core::{PublisherId, ValueObject};

/// Immutable value record for a publisher.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Publisher {
    id: PublisherId,
    name: String,
    address: String,
}

impl Publisher {
    pub fn new(id: PublisherId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
        }
    }

    pub fn id(&self) -> PublisherId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl ValueObject for Publisher {}
