//! Board records and name validation

use std::collections::HashMap;

use serde::Serialize;

use super::{BoardId, Node, NodeId, ValidationError};

/// Validated board name (any non-empty string)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardName(String);

impl BoardName {
    /// Create a new board name.
    ///
    /// Only presence is checked: whitespace, case and length are
    /// accepted as given.
    ///
    /// # Example
    /// ```
    /// use corkboard_server::models::BoardName;
    ///
    /// assert!(BoardName::new("Sprint").is_ok());
    /// assert!(BoardName::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Missing { field: "Name" });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for BoardName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Full board record as held by the store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    pub name: String,
    pub nodes: HashMap<NodeId, Node>,
}

impl Board {
    pub fn new(name: BoardName) -> Self {
        Self {
            name: name.into_string(),
            nodes: HashMap::new(),
        }
    }
}

/// Board listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub id: BoardId,
    pub name: String,
}
