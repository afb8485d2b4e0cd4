//! Nomination collection contract and in-memory implementation.

use crate::model::nomination::Nomination;
use crate::model::reference_id::ReferenceId;
use crate::repo::{RepoError, RepoResult};

/// Storage interface for nominations.
///
/// There is no single-item delete: nominations only leave the collection
/// through a category cascade.
pub trait NominationRepository {
    /// Appends one nomination.
    ///
    /// # Errors
    /// - `DuplicateId` / `DuplicateReferenceId` on identity clashes.
    fn insert_nomination(&mut self, nomination: Nomination) -> RepoResult<()>;
    fn get_nomination(&self, id: &str) -> Option<&Nomination>;
    fn get_nomination_mut(&mut self, id: &str) -> Option<&mut Nomination>;
    fn find_by_reference(&self, reference_id: &ReferenceId) -> Option<&Nomination>;
    /// Removes every nomination pointing at `category_id`, in order.
    fn remove_for_category(&mut self, category_id: &str) -> Vec<Nomination>;
    /// All nominations in insertion order.
    fn list_nominations(&self) -> &[Nomination];

    fn contains_nomination(&self, id: &str) -> bool {
        self.get_nomination(id).is_some()
    }

    fn count_for_category(&self, category_id: &str) -> usize {
        self.list_nominations()
            .iter()
            .filter(|nomination| nomination.category_id == category_id)
            .count()
    }
}

/// Vec-backed nomination collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNominationRepository {
    nominations: Vec<Nomination>,
}

impl InMemoryNominationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NominationRepository for InMemoryNominationRepository {
    fn insert_nomination(&mut self, nomination: Nomination) -> RepoResult<()> {
        if self.contains_nomination(&nomination.id) {
            return Err(RepoError::DuplicateId(nomination.id));
        }
        if self.find_by_reference(&nomination.reference_id).is_some() {
            return Err(RepoError::DuplicateReferenceId(
                nomination.reference_id.to_string(),
            ));
        }
        self.nominations.push(nomination);
        Ok(())
    }

    fn get_nomination(&self, id: &str) -> Option<&Nomination> {
        self.nominations.iter().find(|nomination| nomination.id == id)
    }

    fn get_nomination_mut(&mut self, id: &str) -> Option<&mut Nomination> {
        self.nominations
            .iter_mut()
            .find(|nomination| nomination.id == id)
    }

    fn find_by_reference(&self, reference_id: &ReferenceId) -> Option<&Nomination> {
        self.nominations
            .iter()
            .find(|nomination| &nomination.reference_id == reference_id)
    }

    fn remove_for_category(&mut self, category_id: &str) -> Vec<Nomination> {
        let (removed, kept): (Vec<Nomination>, Vec<Nomination>) = std::mem::take(&mut self.nominations)
            .into_iter()
            .partition(|nomination| nomination.category_id == category_id);
        self.nominations = kept;
        removed
    }

    fn list_nominations(&self) -> &[Nomination] {
        &self.nominations
    }
}
