use awards_core::{
    AwardsStore, DocumentRef, FixedClock, NewNomination, NominationPatch, NominationStatus,
    StoreError,
};
use regex::Regex;

fn input(category_id: &str, nominee: &str) -> NewNomination {
    NewNomination {
        nominee_id: format!("EMP-{nominee}"),
        nominee_name: nominee.to_string(),
        category_id: category_id.to_string(),
        category_name: "Innovation Champion Award".to_string(),
        justification: "Improved X by 40%".to_string(),
        nominated_by: "John Manager".to_string(),
        ..NewNomination::default()
    }
}

#[test]
fn add_nomination_forces_pending_and_issues_reference_id() {
    let pattern = Regex::new(r"^AWD-[0-9]{4}-[A-Z0-9]{6}$").unwrap();
    let mut store = AwardsStore::new();

    for status in NominationStatus::ALL {
        let nomination = store
            .add_nomination(NewNomination {
                status: Some(status),
                ..input("1", "Ana")
            })
            .unwrap();
        assert_eq!(nomination.status, NominationStatus::Pending);
        assert!(pattern.is_match(nomination.reference_id.as_str()));
    }
    assert_eq!(store.nominations().len(), 4);
}

#[test]
fn reference_id_encodes_clock_year() {
    // 2031-06-15T00:00:00Z
    let mut store = AwardsStore::new().with_clock(Box::new(FixedClock(1_939_248_000_000)));
    let nomination = store.add_nomination(input("1", "Ana")).unwrap();
    assert_eq!(nomination.reference_id.year(), 2031);
    assert_eq!(nomination.nominated_at, 1_939_248_000_000);
    assert!(nomination.reference_id.as_str().starts_with("AWD-2031-"));
}

#[test]
fn ids_and_reference_ids_are_distinct_and_unique() {
    let mut store = AwardsStore::new();
    for i in 0..100 {
        store.add_nomination(input("1", &format!("n{i}"))).unwrap();
    }
    let mut ids: Vec<&str> = store.nominations().iter().map(|n| n.id.as_str()).collect();
    let mut refs: Vec<&str> = store
        .nominations()
        .iter()
        .map(|n| n.reference_id.as_str())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    refs.sort_unstable();
    refs.dedup();
    assert_eq!(ids.len(), 100);
    assert_eq!(refs.len(), 100);
    assert!(store
        .nominations()
        .iter()
        .all(|n| n.id != n.reference_id.as_str()));
}

#[test]
fn add_nomination_does_not_check_category_existence() {
    let mut store = AwardsStore::new();
    let nomination = store.add_nomination(input("missing", "Ana")).unwrap();
    assert_eq!(nomination.category_id, "missing");
    assert!(store.category("missing").is_none());
}

#[test]
fn supporting_documents_are_kept_verbatim() {
    let mut store = AwardsStore::new();
    let documents = vec![
        DocumentRef {
            name: "impact.pdf".to_string(),
            media_type: Some("application/pdf".to_string()),
            size_bytes: Some(50 * 1024 * 1024),
        },
        DocumentRef::new("photo.heic"),
    ];
    let nomination = store
        .add_nomination(NewNomination {
            supporting_documents: documents.clone(),
            ..input("1", "Ana")
        })
        .unwrap();
    assert_eq!(nomination.supporting_documents, documents);
}

#[test]
fn update_nomination_changes_status_but_not_identity() {
    let mut store = AwardsStore::new();
    let created = store.add_nomination(input("1", "Ana")).unwrap();

    let reviewed = store
        .set_nomination_status(&created.id, NominationStatus::UnderReview)
        .unwrap();
    let approved = store
        .update_nomination(
            &created.id,
            NominationPatch {
                status: Some(NominationStatus::Approved),
                justification: Some("Improved X by 45%".to_string()),
                ..NominationPatch::default()
            },
        )
        .unwrap();

    assert_eq!(reviewed.status, NominationStatus::UnderReview);
    assert_eq!(approved.status, NominationStatus::Approved);
    assert_eq!(approved.justification, "Improved X by 45%");
    assert_eq!(approved.id, created.id);
    assert_eq!(approved.reference_id, created.reference_id);
    assert_eq!(approved.nominated_at, created.nominated_at);
}

#[test]
fn update_unknown_nomination_reports_not_found() {
    let mut store = AwardsStore::with_sample_data().unwrap();
    let before = store.snapshot();
    let err = store
        .set_nomination_status("ghost", NominationStatus::Approved)
        .unwrap_err();
    assert_eq!(err, StoreError::NominationNotFound("ghost".to_string()));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn category_nominations_returns_matches_in_insertion_order() {
    let mut store = AwardsStore::with_sample_data().unwrap();
    let a = store.add_nomination(input("2", "A")).unwrap();
    store.add_nomination(input("1", "B")).unwrap();
    let c = store.add_nomination(input("2", "C")).unwrap();

    let ids: Vec<&str> = store
        .category_nominations("2")
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(ids, [a.id.as_str(), c.id.as_str()]);
    assert_eq!(store.category_nominations("1").len(), 2);
    assert!(store.category_nominations("9").is_empty());
}

#[test]
fn category_name_is_a_creation_time_snapshot() {
    let mut store = AwardsStore::with_sample_data().unwrap();
    let nomination = store.add_nomination(input("1", "Ana")).unwrap();

    store
        .update_category(
            "1",
            awards_core::CategoryPatch {
                award_title: Some("Renamed Award".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(
        store.nomination(&nomination.id).unwrap().category_name,
        "Innovation Champion Award"
    );
}

#[test]
fn lookup_by_reference_id() {
    let mut store = AwardsStore::with_sample_data().unwrap();
    let created = store.add_nomination(input("1", "Ana")).unwrap();
    assert_eq!(
        store.nomination_by_reference(&created.reference_id).unwrap().id,
        created.id
    );
}
