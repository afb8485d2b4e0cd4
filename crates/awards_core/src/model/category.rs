//! Award category domain model.
//!
//! # Responsibility
//! - Define the award category record and its Active/Inactive gate.
//! - Provide creation input and partial-update shapes for store callers.
//! - Provide form-level validation that callers run before touching the store.
//!
//! # Invariants
//! - `id`, `created_at` are assigned by the store and never change.
//! - `updated_at >= created_at`, refreshed on every mutation.
//! - The store itself does not validate; `validate()` is the form's gate.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque category identifier. Unique across the category collection.
pub type CategoryId = String;

/// Whether a category currently accepts nominations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryStatus {
    #[default]
    Active,
    Inactive,
}

impl CategoryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// Returns the opposite status.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Display for CategoryStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named award definition owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardCategory {
    pub id: CategoryId,
    pub category_name: String,
    /// Copied onto nominations as `category_name` when they are created.
    pub award_title: String,
    pub description: String,
    /// Free text shown to nominators; never evaluated by the core.
    pub eligibility_criteria: String,
    pub status: CategoryStatus,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds.
    pub updated_at: i64,
}

impl AwardCategory {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Caller-supplied fields for creating a category.
///
/// Ids and timestamps are deliberately absent; the store assigns them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub category_name: String,
    pub award_title: String,
    pub description: String,
    pub eligibility_criteria: String,
    pub status: CategoryStatus,
}

impl NewCategory {
    /// Creates an Active category input with empty description/eligibility.
    pub fn new(category_name: impl Into<String>, award_title: impl Into<String>) -> Self {
        Self {
            category_name: category_name.into(),
            award_title: award_title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_eligibility_criteria(mut self, criteria: impl Into<String>) -> Self {
        self.eligibility_criteria = criteria.into();
        self
    }

    pub fn with_status(mut self, status: CategoryStatus) -> Self {
        self.status = status;
        self
    }

    /// Category form gate: name and award title must not be blank.
    ///
    /// # Errors
    /// - `BlankCategoryName` / `BlankAwardTitle`, in that order of precedence.
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.category_name.trim().is_empty() {
            return Err(CategoryValidationError::BlankCategoryName);
        }
        if self.award_title.trim().is_empty() {
            return Err(CategoryValidationError::BlankAwardTitle);
        }
        Ok(())
    }

    pub(crate) fn into_category(self, id: CategoryId, now_ms: i64) -> AwardCategory {
        AwardCategory {
            id,
            category_name: self.category_name,
            award_title: self.award_title,
            description: self.description,
            eligibility_criteria: self.eligibility_criteria,
            status: self.status,
            created_at: now_ms,
            updated_at: now_ms,
        }
    }
}

/// Partial category update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    pub category_name: Option<String>,
    pub award_title: Option<String>,
    pub description: Option<String>,
    pub eligibility_criteria: Option<String>,
    pub status: Option<CategoryStatus>,
}

impl CategoryPatch {
    /// Patch that only changes status.
    pub fn status(status: CategoryStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Edit-form gate: fields that are present must not blank out the
    /// required name/title.
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if is_blank(self.category_name.as_deref()) {
            return Err(CategoryValidationError::BlankCategoryName);
        }
        if is_blank(self.award_title.as_deref()) {
            return Err(CategoryValidationError::BlankAwardTitle);
        }
        Ok(())
    }

    pub(crate) fn apply_to(self, category: &mut AwardCategory) {
        if let Some(value) = self.category_name {
            category.category_name = value;
        }
        if let Some(value) = self.award_title {
            category.award_title = value;
        }
        if let Some(value) = self.description {
            category.description = value;
        }
        if let Some(value) = self.eligibility_criteria {
            category.eligibility_criteria = value;
        }
        if let Some(value) = self.status {
            category.status = value;
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_some_and(|text| text.trim().is_empty())
}

/// Category form validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryValidationError {
    BlankCategoryName,
    BlankAwardTitle,
}

impl Display for CategoryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankCategoryName => write!(f, "category name is required"),
            Self::BlankAwardTitle => write!(f, "award title is required"),
        }
    }
}

impl Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::{CategoryPatch, CategoryStatus, CategoryValidationError, NewCategory};

    #[test]
    fn toggled_flips_between_active_and_inactive() {
        assert_eq!(CategoryStatus::Active.toggled(), CategoryStatus::Inactive);
        assert_eq!(CategoryStatus::Inactive.toggled(), CategoryStatus::Active);
    }

    #[test]
    fn new_category_defaults_to_active() {
        let input = NewCategory::new("Mentorship", "Mentor Award");
        assert_eq!(input.status, CategoryStatus::Active);
        assert!(input.description.is_empty());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_name_before_title() {
        let input = NewCategory::new("  ", "");
        assert_eq!(
            input.validate().expect_err("blank name must fail"),
            CategoryValidationError::BlankCategoryName
        );

        let input = NewCategory::new("Mentorship", "\t");
        assert_eq!(
            input.validate().expect_err("blank title must fail"),
            CategoryValidationError::BlankAwardTitle
        );
    }

    #[test]
    fn patch_validation_ignores_absent_fields() {
        assert!(CategoryPatch::default().validate().is_ok());
        assert!(CategoryPatch::status(CategoryStatus::Inactive)
            .validate()
            .is_ok());

        let patch = CategoryPatch {
            award_title: Some(" ".to_string()),
            ..CategoryPatch::default()
        };
        assert_eq!(
            patch.validate().expect_err("blank title patch must fail"),
            CategoryValidationError::BlankAwardTitle
        );
    }

    #[test]
    fn apply_to_only_touches_present_fields() {
        let mut category =
            NewCategory::new("Innovation", "Innovation Award").into_category("c1".into(), 10);
        CategoryPatch {
            description: Some("new text".to_string()),
            ..CategoryPatch::default()
        }
        .apply_to(&mut category);

        assert_eq!(category.description, "new text");
        assert_eq!(category.category_name, "Innovation");
        assert_eq!(category.award_title, "Innovation Award");
        assert_eq!(category.status, CategoryStatus::Active);
    }
}
