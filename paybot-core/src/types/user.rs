//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Creates a user with only id and first name set.
    pub fn new(id: i64, first_name: Option<&str>) -> Self {
        Self {
            id,
            username: None,
            first_name: first_name.map(str::to_string),
            last_name: None,
        }
    }

    /// Placeholder for updates without a sender (e.g. channel posts).
    pub fn unknown() -> Self {
        Self {
            id: 0,
            username: None,
            first_name: None,
            last_name: None,
        }
    }

    /// First name when present and non-empty. Whitespace-only names are kept verbatim.
    pub fn display_first_name(&self) -> Option<&str> {
        self.first_name.as_deref().filter(|name| !name.is_empty())
    }
}
