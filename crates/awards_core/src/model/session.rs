//! Session identity for the active user of the recognition tool.

use serde::{Deserialize, Serialize};

/// Role selected on the launchpad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Defines and maintains award categories.
    Admin,
    /// Submits and tracks nominations.
    Manager,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
        }
    }
}

/// Current session user. Not authenticated by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    pub email: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: UserRole,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            email: email.into(),
        }
    }
}
