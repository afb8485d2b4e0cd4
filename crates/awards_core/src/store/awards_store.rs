//! Awards store: the single source of truth for categories, nominations and
//! the session identity.
//!
//! # Responsibility
//! - Own both collections and the current user/role.
//! - Assign ids, reference ids and timestamps; callers never supply them.
//! - Answer the derived queries the dashboards and wizard render from.
//!
//! # Invariants
//! - Every mutation goes through `&mut AwardsStore`.
//! - `updated_at` strictly increases on every category mutation.
//! - New nominations are always `Pending` with a never-reused reference id.
//! - Unknown ids are reported as `StoreError::*NotFound`; the collections are
//!   left untouched in that case.
//! - The store performs no form validation and no category existence check
//!   when creating nominations.

use crate::model::category::{AwardCategory, CategoryId, CategoryPatch, NewCategory};
use crate::model::nomination::{
    NewNomination, Nomination, NominationId, NominationPatch, NominationStatus,
};
use crate::model::reference_id::{ReferenceId, ReferenceIdError};
use crate::model::session::{User, UserRole};
use crate::repo::category_repo::{CategoryRepository, InMemoryCategoryRepository};
use crate::repo::nomination_repo::{InMemoryNominationRepository, NominationRepository};
use crate::repo::RepoError;
use crate::store::clock::{utc_year, Clock, SystemClock};
use crate::store::policy::CategoryDeletePolicy;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No category matches the id.
    CategoryNotFound(CategoryId),
    /// No nomination matches the id.
    NominationNotFound(NominationId),
    /// Delete refused by `CategoryDeletePolicy::RejectIfNominated`.
    CategoryHasNominations { id: CategoryId, count: usize },
    /// Malformed reference id in seeded or imported data.
    InvalidReference(ReferenceIdError),
    /// Collection-level failure.
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CategoryNotFound(id) => write!(f, "category not found: {id}"),
            Self::NominationNotFound(id) => write!(f, "nomination not found: {id}"),
            Self::CategoryHasNominations { id, count } => write!(
                f,
                "category {id} still has {count} nomination(s); delete refused"
            ),
            Self::InvalidReference(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidReference(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ReferenceIdError> for StoreError {
    fn from(value: ReferenceIdError) -> Self {
        Self::InvalidReference(value)
    }
}

/// Result of a successful category delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedCategory {
    pub category: AwardCategory,
    /// Nominations removed by `CategoryDeletePolicy::Cascade`.
    pub removed_nominations: Vec<Nomination>,
    /// Nominations left pointing at the deleted id.
    pub orphaned_nominations: usize,
}

/// Owned, serializable copy of the store for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub categories: Vec<AwardCategory>,
    pub nominations: Vec<Nomination>,
    pub current_user: Option<User>,
    pub current_role: Option<UserRole>,
}

/// Explicit state container for the recognition tool.
///
/// Defaults to in-memory collections; other collection backends plug in
/// through the repository traits.
pub struct AwardsStore<C = InMemoryCategoryRepository, N = InMemoryNominationRepository> {
    categories: C,
    nominations: N,
    current_user: Option<User>,
    current_role: Option<UserRole>,
    delete_policy: CategoryDeletePolicy,
    clock: Box<dyn Clock>,
}

impl AwardsStore {
    /// Creates an empty in-memory store on the system clock.
    pub fn new() -> Self {
        Self::with_parts(
            InMemoryCategoryRepository::new(),
            InMemoryNominationRepository::new(),
            Box::new(SystemClock),
        )
    }
}

impl Default for AwardsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CategoryRepository, N: NominationRepository> AwardsStore<C, N> {
    /// Creates a store over caller-provided collections and clock.
    pub fn with_parts(categories: C, nominations: N, clock: Box<dyn Clock>) -> Self {
        Self {
            categories,
            nominations,
            current_user: None,
            current_role: None,
            delete_policy: CategoryDeletePolicy::default(),
            clock,
        }
    }

    /// Replaces the time source, typically with a `FixedClock` in tests.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Sets the policy applied by `delete_category`.
    pub fn with_delete_policy(mut self, policy: CategoryDeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }

    /// Policy currently applied by `delete_category`.
    pub fn delete_policy(&self) -> CategoryDeletePolicy {
        self.delete_policy
    }

    /// Switches the delete policy at runtime.
    pub fn set_delete_policy(&mut self, policy: CategoryDeletePolicy) {
        self.delete_policy = policy;
    }

    // Session -----------------------------------------------------------------

    /// Overwrites the session user.
    pub fn set_user(&mut self, user: User) {
        info!("event=session_user module=store status=ok user_id={}", user.id);
        self.current_user = Some(user);
    }

    /// Overwrites the session role.
    pub fn set_role(&mut self, role: UserRole) {
        info!(
            "event=session_role module=store status=ok role={}",
            role.as_str()
        );
        self.current_role = Some(role);
    }

    /// Session user, if one was set.
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Session role, if one was set.
    pub fn current_role(&self) -> Option<UserRole> {
        self.current_role
    }

    // Categories --------------------------------------------------------------

    /// All categories in insertion order.
    pub fn categories(&self) -> &[AwardCategory] {
        self.categories.list_categories()
    }

    /// Category by id, whatever its status.
    pub fn category(&self, id: &str) -> Option<&AwardCategory> {
        self.categories.get_category(id)
    }

    /// Appends a category with a fresh id and `created_at == updated_at == now`.
    ///
    /// No validation happens here; forms call `NewCategory::validate` first.
    pub fn add_category(&mut self, input: NewCategory) -> StoreResult<AwardCategory> {
        let id = self.fresh_category_id();
        let category = input.into_category(id, self.clock.now_ms());
        self.categories.insert_category(category.clone())?;
        info!(
            "event=category_create module=store status=ok category_id={} state={}",
            category.id, category.status
        );
        Ok(category)
    }

    /// Merges `patch` into the category and refreshes `updated_at`.
    ///
    /// # Errors
    /// - `CategoryNotFound` when `id` is unknown; nothing changes.
    pub fn update_category(&mut self, id: &str, patch: CategoryPatch) -> StoreResult<AwardCategory> {
        let now = self.clock.now_ms();
        let Some(category) = self.categories.get_category_mut(id) else {
            return Err(not_found_category("category_update", id));
        };
        patch.apply_to(category);
        category.updated_at = next_update_timestamp(category.updated_at, now);
        info!(
            "event=category_update module=store status=ok category_id={} state={}",
            category.id, category.status
        );
        Ok(category.clone())
    }

    /// Flips Active/Inactive and refreshes `updated_at`.
    ///
    /// # Errors
    /// - `CategoryNotFound` when `id` is unknown; nothing changes.
    pub fn toggle_category_status(&mut self, id: &str) -> StoreResult<AwardCategory> {
        let now = self.clock.now_ms();
        let Some(category) = self.categories.get_category_mut(id) else {
            return Err(not_found_category("category_toggle", id));
        };
        category.status = category.status.toggled();
        category.updated_at = next_update_timestamp(category.updated_at, now);
        info!(
            "event=category_toggle module=store status=ok category_id={} state={}",
            category.id, category.status
        );
        Ok(category.clone())
    }

    /// Hard-removes a category, handling its nominations per the delete policy.
    ///
    /// # Errors
    /// - `CategoryNotFound` when `id` is unknown.
    /// - `CategoryHasNominations` under `RejectIfNominated` when nominations
    ///   still reference the category. Nothing is removed.
    pub fn delete_category(&mut self, id: &str) -> StoreResult<DeletedCategory> {
        if !self.categories.contains_category(id) {
            return Err(not_found_category("category_delete", id));
        }

        let referencing = self.nominations.count_for_category(id);
        let removed_nominations = match self.delete_policy {
            CategoryDeletePolicy::RejectIfNominated if referencing > 0 => {
                warn!(
                    "event=category_delete module=store status=rejected category_id={} nominations={}",
                    id, referencing
                );
                return Err(StoreError::CategoryHasNominations {
                    id: id.to_string(),
                    count: referencing,
                });
            }
            CategoryDeletePolicy::Cascade => self.nominations.remove_for_category(id),
            _ => Vec::new(),
        };

        let category = self.categories.remove_category(id)?;
        let orphaned_nominations = referencing - removed_nominations.len();
        info!(
            "event=category_delete module=store status=ok category_id={} policy={} removed={} orphaned={}",
            id,
            self.delete_policy,
            removed_nominations.len(),
            orphaned_nominations
        );

        Ok(DeletedCategory {
            category,
            removed_nominations,
            orphaned_nominations,
        })
    }

    /// Active categories in collection order.
    pub fn active_categories(&self) -> Vec<&AwardCategory> {
        self.categories()
            .iter()
            .filter(|category| category.is_active())
            .collect()
    }

    /// Returns the category only when it exists and is Active.
    pub fn active_category(&self, id: &str) -> Option<&AwardCategory> {
        self.category(id).filter(|category| category.is_active())
    }

    // Nominations -------------------------------------------------------------

    /// All nominations in insertion order.
    pub fn nominations(&self) -> &[Nomination] {
        self.nominations.list_nominations()
    }

    /// Nomination by internal id.
    pub fn nomination(&self, id: &str) -> Option<&Nomination> {
        self.nominations.get_nomination(id)
    }

    /// Nomination by its public reference id.
    pub fn nomination_by_reference(&self, reference_id: &ReferenceId) -> Option<&Nomination> {
        self.nominations.find_by_reference(reference_id)
    }

    /// Appends a nomination with a fresh id and reference id, stamped now.
    ///
    /// Status is forced to `Pending` whatever `input.status` says. The
    /// category id is not checked against the category collection.
    pub fn add_nomination(&mut self, input: NewNomination) -> StoreResult<Nomination> {
        let now = self.clock.now_ms();
        let id = self.fresh_nomination_id();
        let reference_id = self.fresh_reference_id(utc_year(now));
        let nomination = input.into_nomination(id, reference_id, now);
        self.nominations.insert_nomination(nomination.clone())?;
        info!(
            "event=nomination_create module=store status=ok nomination_id={} reference_id={} category_id={}",
            nomination.id, nomination.reference_id, nomination.category_id
        );
        Ok(nomination)
    }

    /// Merges `patch` into the nomination.
    ///
    /// # Errors
    /// - `NominationNotFound` when `id` is unknown; nothing changes.
    pub fn update_nomination(
        &mut self,
        id: &str,
        patch: NominationPatch,
    ) -> StoreResult<Nomination> {
        let Some(nomination) = self.nominations.get_nomination_mut(id) else {
            warn!(
                "event=nomination_update module=store status=not_found nomination_id={}",
                id
            );
            return Err(StoreError::NominationNotFound(id.to_string()));
        };
        patch.apply_to(nomination);
        info!(
            "event=nomination_update module=store status=ok nomination_id={} state={}",
            nomination.id, nomination.status
        );
        Ok(nomination.clone())
    }

    /// Records a reviewer decision or progress step.
    pub fn set_nomination_status(
        &mut self,
        id: &str,
        status: NominationStatus,
    ) -> StoreResult<Nomination> {
        self.update_nomination(id, NominationPatch::status(status))
    }

    /// Nominations for one category id in collection order.
    pub fn category_nominations(&self, category_id: &str) -> Vec<&Nomination> {
        self.nominations()
            .iter()
            .filter(|nomination| nomination.category_id == category_id)
            .collect()
    }

    /// Owned copy of everything the UI renders.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            categories: self.categories().to_vec(),
            nominations: self.nominations().to_vec(),
            current_user: self.current_user.clone(),
            current_role: self.current_role,
        }
    }

    // Seeding -----------------------------------------------------------------

    /// Inserts pre-built records, keeping their ids and timestamps.
    ///
    /// Used by sample-data seeding and imports; skips id generation.
    ///
    /// # Errors
    /// - `Repo(DuplicateId)` / `Repo(DuplicateReferenceId)` when a record
    ///   collides with the store or with another record in the batch. The
    ///   whole batch is checked first, so a failed restore inserts nothing.
    pub fn restore(
        &mut self,
        categories: Vec<AwardCategory>,
        nominations: Vec<Nomination>,
    ) -> StoreResult<()> {
        if let Err(err) = self.check_restore_batch(&categories, &nominations) {
            warn!(
                "event=store_restore module=store status=rejected categories={} nominations={}",
                categories.len(),
                nominations.len()
            );
            return Err(err.into());
        }

        let (category_count, nomination_count) = (categories.len(), nominations.len());
        for category in categories {
            self.categories.insert_category(category)?;
        }
        for nomination in nominations {
            self.nominations.insert_nomination(nomination)?;
        }
        info!(
            "event=store_restore module=store status=ok categories={} nominations={}",
            category_count, nomination_count
        );
        Ok(())
    }

    fn check_restore_batch(
        &self,
        categories: &[AwardCategory],
        nominations: &[Nomination],
    ) -> Result<(), RepoError> {
        let mut category_ids = HashSet::new();
        for category in categories {
            if self.categories.contains_category(&category.id)
                || !category_ids.insert(category.id.as_str())
            {
                return Err(RepoError::DuplicateId(category.id.clone()));
            }
        }

        let mut nomination_ids = HashSet::new();
        let mut reference_ids = HashSet::new();
        for nomination in nominations {
            if self.nominations.contains_nomination(&nomination.id)
                || !nomination_ids.insert(nomination.id.as_str())
            {
                return Err(RepoError::DuplicateId(nomination.id.clone()));
            }
            if self
                .nominations
                .find_by_reference(&nomination.reference_id)
                .is_some()
                || !reference_ids.insert(&nomination.reference_id)
            {
                return Err(RepoError::DuplicateReferenceId(
                    nomination.reference_id.to_string(),
                ));
            }
        }
        Ok(())
    }

    // Identity ----------------------------------------------------------------

    fn fresh_category_id(&self) -> CategoryId {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.categories.contains_category(&id) {
                return id;
            }
        }
    }

    fn fresh_nomination_id(&self) -> NominationId {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.nominations.contains_nomination(&id) {
                return id;
            }
        }
    }

    fn fresh_reference_id(&self, year: i32) -> ReferenceId {
        let mut rng = rand::thread_rng();
        loop {
            let reference_id = ReferenceId::generate(year, &mut rng);
            if self.nominations.find_by_reference(&reference_id).is_none() {
                return reference_id;
            }
        }
    }
}

fn next_update_timestamp(previous: i64, now: i64) -> i64 {
    now.max(previous.saturating_add(1))
}

fn not_found_category(event: &str, id: &str) -> StoreError {
    warn!(
        "event={} module=store status=not_found category_id={}",
        event, id
    );
    StoreError::CategoryNotFound(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::{next_update_timestamp, AwardsStore, StoreError};
    use crate::model::category::NewCategory;
    use crate::model::nomination::NewNomination;
    use crate::repo::RepoError;
    use crate::store::clock::FixedClock;
    use std::sync::{Arc, Mutex};
    use std::thread;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn store_can_be_shared_behind_a_mutex() {
        assert_send_sync::<AwardsStore>();

        let store = Arc::new(Mutex::new(AwardsStore::new()));
        let worker = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store
                    .lock()
                    .expect("lock")
                    .add_category(NewCategory::new("Teamwork", "Team Player"))
                    .expect("create")
            })
        };
        let created = worker.join().expect("worker");
        assert_eq!(
            store.lock().expect("lock").category(&created.id),
            Some(&created)
        );
    }

    #[test]
    fn failed_restore_changes_nothing() {
        let mut store = AwardsStore::new().with_clock(Box::new(FixedClock(1_000)));
        let existing = store
            .add_category(NewCategory::new("Mentorship", "Mentor Award"))
            .expect("create");
        let before = store.snapshot();

        let fresh =
            NewCategory::new("Teamwork", "Team Player").into_category("fresh".to_string(), 1_000);
        let err = store
            .restore(vec![fresh.clone(), existing.clone()], Vec::new())
            .expect_err("duplicate category id");
        assert_eq!(
            err,
            StoreError::Repo(RepoError::DuplicateId(existing.id.clone()))
        );
        assert_eq!(store.snapshot(), before);

        let err = store
            .restore(vec![fresh.clone(), fresh.clone()], Vec::new())
            .expect_err("duplicate inside batch");
        assert_eq!(
            err,
            StoreError::Repo(RepoError::DuplicateId("fresh".to_string()))
        );
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn failed_nomination_restore_keeps_categories_out() {
        let mut store = AwardsStore::new();
        let nominated = store
            .add_nomination(NewNomination {
                nominee_id: "EMP001".to_string(),
                nominee_name: "Alex".to_string(),
                category_id: "1".to_string(),
                category_name: "Award".to_string(),
                justification: "Shipped".to_string(),
                nominated_by: "Manager".to_string(),
                supporting_documents: Vec::new(),
                status: None,
            })
            .expect("nominate");
        let before = store.snapshot();

        let mut clash = nominated.clone();
        clash.id = "other".to_string();
        let category =
            NewCategory::new("Teamwork", "Team Player").into_category("c1".to_string(), 1);
        let err = store
            .restore(vec![category], vec![clash])
            .expect_err("reference id already issued");
        assert_eq!(
            err,
            StoreError::Repo(RepoError::DuplicateReferenceId(
                nominated.reference_id.to_string()
            ))
        );
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn next_update_timestamp_is_strictly_increasing() {
        assert_eq!(next_update_timestamp(10, 50), 50);
        assert_eq!(next_update_timestamp(10, 10), 11);
        assert_eq!(next_update_timestamp(10, 3), 11);
    }

    #[test]
    fn frozen_clock_still_advances_updated_at() {
        let mut store = AwardsStore::new().with_clock(Box::new(FixedClock(1_000)));
        let created = store
            .add_category(NewCategory::new("Mentorship", "Mentor Award"))
            .expect("create");
        assert_eq!(created.created_at, 1_000);

        let first = store.toggle_category_status(&created.id).expect("toggle");
        let second = store.toggle_category_status(&created.id).expect("toggle");
        assert_eq!(first.updated_at, 1_001);
        assert_eq!(second.updated_at, 1_002);
        assert_eq!(second.created_at, 1_000);
    }
}
