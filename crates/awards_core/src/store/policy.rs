//! What happens to nominations when their category is deleted.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Category delete policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryDeletePolicy {
    /// Refuse to delete a category that still has nominations.
    RejectIfNominated,
    /// Delete the category and every nomination referencing it.
    Cascade,
    /// Delete the category only; nominations keep a dangling `category_id`
    /// and stay displayable through their `category_name` snapshot.
    #[default]
    AllowOrphans,
}

impl CategoryDeletePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RejectIfNominated => "reject_if_nominated",
            Self::Cascade => "cascade",
            Self::AllowOrphans => "allow_orphans",
        }
    }

    /// Parses a config value. Accepts the canonical names plus short aliases.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reject_if_nominated" | "reject" => Some(Self::RejectIfNominated),
            "cascade" => Some(Self::Cascade),
            "allow_orphans" | "orphan" | "orphans" => Some(Self::AllowOrphans),
            _ => None,
        }
    }
}

impl Display for CategoryDeletePolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
