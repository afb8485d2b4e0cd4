//! Nomination domain model.
//!
//! # Responsibility
//! - Define the nomination record and its review lifecycle status.
//! - Provide creation input and partial-update shapes for store callers.
//!
//! # Invariants
//! - `id`, `reference_id` and `nominated_at` are store-assigned and immutable.
//! - `status` is `Pending` at creation; later statuses come from explicit
//!   updates by an external reviewer.
//! - `category_name` is the target category's award title at creation time
//!   and is not re-synced when the category changes or disappears.

use crate::model::category::CategoryId;
use crate::model::reference_id::ReferenceId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque nomination identifier. Distinct from the human-facing reference id.
pub type NominationId = String;

/// Review lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NominationStatus {
    #[default]
    Pending,
    #[serde(rename = "Under Review")]
    UnderReview,
    Approved,
    Rejected,
}

impl NominationStatus {
    pub const ALL: [NominationStatus; 4] = [
        Self::Pending,
        Self::UnderReview,
        Self::Approved,
        Self::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::UnderReview => "Under Review",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Whether a reviewer decision has been recorded.
    pub fn is_decided(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl Display for NominationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque attachment reference carried with a nomination.
///
/// The core never opens, sizes or type-checks the referenced file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

impl DocumentRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media_type: None,
            size_bytes: None,
        }
    }
}

/// Nomination record owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nomination {
    pub id: NominationId,
    pub reference_id: ReferenceId,
    pub nominee_id: String,
    pub nominee_name: String,
    /// Soft reference; existence is not enforced.
    pub category_id: CategoryId,
    pub category_name: String,
    pub justification: String,
    #[serde(default)]
    pub supporting_documents: Vec<DocumentRef>,
    pub status: NominationStatus,
    pub nominated_by: String,
    /// Unix epoch milliseconds.
    pub nominated_at: i64,
}

/// Caller-supplied fields for creating a nomination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNomination {
    pub nominee_id: String,
    pub nominee_name: String,
    pub category_id: CategoryId,
    pub category_name: String,
    pub justification: String,
    pub nominated_by: String,
    #[serde(default)]
    pub supporting_documents: Vec<DocumentRef>,
    /// Accepted for shape compatibility with UI payloads, ignored by the
    /// store: new nominations always start `Pending`.
    #[serde(default)]
    pub status: Option<NominationStatus>,
}

impl NewNomination {
    pub(crate) fn into_nomination(
        self,
        id: NominationId,
        reference_id: ReferenceId,
        now_ms: i64,
    ) -> Nomination {
        Nomination {
            id,
            reference_id,
            nominee_id: self.nominee_id,
            nominee_name: self.nominee_name,
            category_id: self.category_id,
            category_name: self.category_name,
            justification: self.justification,
            supporting_documents: self.supporting_documents,
            status: NominationStatus::Pending,
            nominated_by: self.nominated_by,
            nominated_at: now_ms,
        }
    }
}

/// Partial nomination update. `None` fields are left untouched.
///
/// Store-assigned fields (`id`, `reference_id`, `nominated_at`) are not
/// patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NominationPatch {
    pub nominee_id: Option<String>,
    pub nominee_name: Option<String>,
    pub category_id: Option<CategoryId>,
    pub category_name: Option<String>,
    pub justification: Option<String>,
    pub supporting_documents: Option<Vec<DocumentRef>>,
    pub status: Option<NominationStatus>,
    pub nominated_by: Option<String>,
}

impl NominationPatch {
    /// Patch that only changes review status.
    pub fn status(status: NominationStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub(crate) fn apply_to(self, nomination: &mut Nomination) {
        if let Some(value) = self.nominee_id {
            nomination.nominee_id = value;
        }
        if let Some(value) = self.nominee_name {
            nomination.nominee_name = value;
        }
        if let Some(value) = self.category_id {
            nomination.category_id = value;
        }
        if let Some(value) = self.category_name {
            nomination.category_name = value;
        }
        if let Some(value) = self.justification {
            nomination.justification = value;
        }
        if let Some(value) = self.supporting_documents {
            nomination.supporting_documents = value;
        }
        if let Some(value) = self.status {
            nomination.status = value;
        }
        if let Some(value) = self.nominated_by {
            nomination.nominated_by = value;
        }
    }
}
