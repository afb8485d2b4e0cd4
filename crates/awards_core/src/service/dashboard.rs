//! Dashboard read models for the admin and manager views.
//!
//! Pure projections over the store; nothing here mutates state.

use crate::model::category::CategoryId;
use crate::model::nomination::NominationStatus;
use crate::repo::category_repo::CategoryRepository;
use crate::repo::nomination_repo::NominationRepository;
use crate::store::AwardsStore;
use serde::Serialize;

/// Nomination count for one category card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNominationCount {
    pub category_id: CategoryId,
    pub award_title: String,
    pub nominations: usize,
}

/// Admin dashboard headline numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub total_categories: usize,
    pub active_categories: usize,
    pub total_nominations: usize,
    pub pending_nominations: usize,
    /// One entry per category, in collection order.
    pub per_category: Vec<CategoryNominationCount>,
}

/// Manager dashboard counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerOverview {
    pub active_categories: usize,
    pub submitted: usize,
    pub pending: usize,
    pub under_review: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub fn admin_overview<C, N>(store: &AwardsStore<C, N>) -> AdminOverview
where
    C: CategoryRepository,
    N: NominationRepository,
{
    let nominations = store.nominations();
    AdminOverview {
        total_categories: store.categories().len(),
        active_categories: store.active_categories().len(),
        total_nominations: nominations.len(),
        pending_nominations: nominations
            .iter()
            .filter(|nomination| nomination.status == NominationStatus::Pending)
            .count(),
        per_category: store
            .categories()
            .iter()
            .map(|category| CategoryNominationCount {
                category_id: category.id.clone(),
                award_title: category.award_title.clone(),
                nominations: store.category_nominations(&category.id).len(),
            })
            .collect(),
    }
}

/// Counters for nominations submitted by `nominated_by`, or all nominations
/// when `None`.
///
/// Names compare trimmed, matching what wizard submission stores.
pub fn manager_overview<C, N>(store: &AwardsStore<C, N>, nominated_by: Option<&str>) -> ManagerOverview
where
    C: CategoryRepository,
    N: NominationRepository,
{
    let mut overview = ManagerOverview {
        active_categories: store.active_categories().len(),
        ..ManagerOverview::default()
    };

    let mine = store
        .nominations()
        .iter()
        .filter(|nomination| {
            nominated_by.map_or(true, |name| nomination.nominated_by.trim() == name.trim())
        });
    for nomination in mine {
        overview.submitted += 1;
        match nomination.status {
            NominationStatus::Pending => overview.pending += 1,
            NominationStatus::UnderReview => overview.under_review += 1,
            NominationStatus::Approved => overview.approved += 1,
            NominationStatus::Rejected => overview.rejected += 1,
        }
    }
    overview
}
