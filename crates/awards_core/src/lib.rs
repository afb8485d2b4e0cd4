//! Core domain logic for the awards recognition tool.
//! This crate is the single source of truth for category and nomination
//! invariants; UI layers only read snapshots and call its operations.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{AwardsConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{
    AwardCategory, CategoryId, CategoryPatch, CategoryStatus, CategoryValidationError, NewCategory,
};
pub use model::nomination::{
    DocumentRef, NewNomination, Nomination, NominationId, NominationPatch, NominationStatus,
};
pub use model::reference_id::{ReferenceId, ReferenceIdError};
pub use model::session::{User, UserRole};
pub use repo::category_repo::{CategoryRepository, InMemoryCategoryRepository};
pub use repo::nomination_repo::{InMemoryNominationRepository, NominationRepository};
pub use repo::{RepoError, RepoResult};
pub use service::dashboard::{admin_overview, manager_overview, AdminOverview, ManagerOverview};
pub use service::wizard::{
    validate_step, FieldIssue, NominationDraft, NominationReview, NominationWizard, WizardAction,
    WizardError, WizardField, WizardStep,
};
pub use store::clock::{Clock, FixedClock, SystemClock};
pub use store::policy::CategoryDeletePolicy;
pub use store::{
    AwardsStore, DeletedCategory, StoreCommand, StoreError, StoreEvent, StoreResult, StoreSnapshot,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
