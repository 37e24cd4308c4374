use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::Metadata;
use crate::display::Record;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Player {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            metadata: Metadata::Null,
        }
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.first_name == other.first_name && self.last_name == other.last_name
    }
}

impl Eq for Player {}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Record::new(f, "player")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}
