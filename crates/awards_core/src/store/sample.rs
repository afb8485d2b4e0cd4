//! Demo data matching the launchpad's first-run state.

use crate::model::category::{AwardCategory, CategoryStatus};
use crate::model::nomination::{Nomination, NominationStatus};
use crate::model::reference_id::ReferenceId;
use crate::repo::category_repo::CategoryRepository;
use crate::repo::nomination_repo::NominationRepository;
use crate::store::awards_store::{AwardsStore, StoreResult};
use log::info;

// 2024-01-15, 2024-01-20, 2024-02-01 and 2024-03-01, midnight UTC.
const JAN_15_2024_MS: i64 = 1_705_276_800_000;
const JAN_20_2024_MS: i64 = 1_705_708_800_000;
const FEB_01_2024_MS: i64 = 1_706_745_600_000;
const MAR_01_2024_MS: i64 = 1_709_251_200_000;

const SAMPLE_REFERENCE_ID: &str = "AWD-2024-ABC123";

impl AwardsStore {
    /// Empty store seeded with the sample categories and nomination.
    pub fn with_sample_data() -> StoreResult<Self> {
        let mut store = Self::new();
        store.seed_sample_data()?;
        Ok(store)
    }
}

impl<C: CategoryRepository, N: NominationRepository> AwardsStore<C, N> {
    /// Inserts categories "1".."3" ("3" Inactive) and one Under Review
    /// nomination against "1".
    ///
    /// # Errors
    /// - `Repo(DuplicateId)` when sample ids are already present.
    pub fn seed_sample_data(&mut self) -> StoreResult<()> {
        let categories = vec![
            sample_category(
                "1",
                "Innovation Excellence",
                "Innovation Champion Award",
                "Recognizing outstanding innovation and creative problem-solving",
                "Employees who have demonstrated exceptional innovation in their work",
                CategoryStatus::Active,
                JAN_15_2024_MS,
            ),
            sample_category(
                "2",
                "Team Collaboration",
                "Team Spirit Award",
                "Honoring exceptional teamwork and collaboration",
                "Teams or individuals who have shown outstanding collaborative efforts",
                CategoryStatus::Active,
                JAN_20_2024_MS,
            ),
            sample_category(
                "3",
                "Customer Focus",
                "Customer Excellence Award",
                "Celebrating exceptional customer service and satisfaction",
                "Employees who have gone above and beyond for customer satisfaction",
                CategoryStatus::Inactive,
                FEB_01_2024_MS,
            ),
        ];

        let nominations = vec![Nomination {
            id: "1".to_string(),
            reference_id: ReferenceId::parse(SAMPLE_REFERENCE_ID)?,
            nominee_id: "EMP001".to_string(),
            nominee_name: "Sarah Johnson".to_string(),
            category_id: "1".to_string(),
            category_name: "Innovation Excellence".to_string(),
            justification: "Sarah led the development of our new automated workflow system \
                            that increased team productivity by 40%."
                .to_string(),
            supporting_documents: Vec::new(),
            status: NominationStatus::UnderReview,
            nominated_by: "John Manager".to_string(),
            nominated_at: MAR_01_2024_MS,
        }];

        let category_count = categories.len();
        let nomination_count = nominations.len();
        self.restore(categories, nominations)?;
        info!(
            "event=sample_seed module=store status=ok categories={} nominations={}",
            category_count, nomination_count
        );
        Ok(())
    }
}

fn sample_category(
    id: &str,
    category_name: &str,
    award_title: &str,
    description: &str,
    eligibility_criteria: &str,
    status: CategoryStatus,
    at_ms: i64,
) -> AwardCategory {
    AwardCategory {
        id: id.to_string(),
        category_name: category_name.to_string(),
        award_title: award_title.to_string(),
        description: description.to_string(),
        eligibility_criteria: eligibility_criteria.to_string(),
        status,
        created_at: at_ms,
        updated_at: at_ms,
    }
}
