use awards_core::{
    AwardsStore, CategoryPatch, CategoryStatus, FixedClock, NewCategory, StoreError,
};
use std::collections::HashSet;

fn mentorship() -> NewCategory {
    NewCategory::new("Mentorship", "Mentor Award")
        .with_description("Recognizes people who grow others")
        .with_eligibility_criteria("Anyone with a mentee")
}

#[test]
fn add_category_appends_one_entry_with_fresh_id() {
    let mut store = AwardsStore::with_sample_data().unwrap();
    let before: HashSet<String> = store.categories().iter().map(|c| c.id.clone()).collect();

    let created = store.add_category(mentorship()).unwrap();

    assert_eq!(store.categories().len(), before.len() + 1);
    assert!(!before.contains(&created.id));
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(store.categories().last().unwrap(), &created);
    assert_eq!(created.status, CategoryStatus::Active);
}

#[test]
fn add_category_accepts_blank_fields() {
    let mut store = AwardsStore::new();
    let created = store.add_category(NewCategory::default()).unwrap();
    assert!(created.category_name.is_empty());
    assert_eq!(store.categories().len(), 1);
}

#[test]
fn generated_ids_are_unique() {
    let mut store = AwardsStore::new();
    let ids: HashSet<String> = (0..200)
        .map(|i| store.add_category(NewCategory::new(format!("c{i}"), "t")).unwrap().id)
        .collect();
    assert_eq!(ids.len(), 200);
}

#[test]
fn update_category_merges_fields_and_advances_updated_at() {
    let mut store = AwardsStore::new();
    let created = store.add_category(mentorship()).unwrap();

    let updated = store
        .update_category(
            &created.id,
            CategoryPatch {
                award_title: Some("Mentor of the Year".to_string()),
                status: Some(CategoryStatus::Inactive),
                ..CategoryPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.award_title, "Mentor of the Year");
    assert_eq!(updated.status, CategoryStatus::Inactive);
    assert_eq!(updated.category_name, "Mentorship");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(store.category(&created.id).unwrap(), &updated);
}

#[test]
fn update_unknown_category_reports_not_found_and_changes_nothing() {
    let mut store = AwardsStore::with_sample_data().unwrap();
    let before = store.snapshot();

    let err = store
        .update_category("nope", CategoryPatch::status(CategoryStatus::Inactive))
        .unwrap_err();

    assert_eq!(err, StoreError::CategoryNotFound("nope".to_string()));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn toggle_twice_restores_status_and_advances_both_times() {
    let mut store = AwardsStore::new().with_clock(Box::new(FixedClock(5_000)));
    let created = store.add_category(mentorship()).unwrap();

    let once = store.toggle_category_status(&created.id).unwrap();
    assert_eq!(once.status, CategoryStatus::Inactive);
    assert!(once.updated_at > created.updated_at);

    let twice = store.toggle_category_status(&created.id).unwrap();
    assert_eq!(twice.status, created.status);
    assert!(twice.updated_at > once.updated_at);
}

#[test]
fn toggle_and_delete_unknown_ids_report_not_found() {
    let mut store = AwardsStore::with_sample_data().unwrap();
    let before = store.snapshot();

    assert_eq!(
        store.toggle_category_status("ghost").unwrap_err(),
        StoreError::CategoryNotFound("ghost".to_string())
    );
    assert_eq!(
        store.delete_category("ghost").unwrap_err(),
        StoreError::CategoryNotFound("ghost".to_string())
    );
    assert_eq!(store.snapshot(), before);
}

#[test]
fn active_categories_is_ordered_subset() {
    let mut store = AwardsStore::with_sample_data().unwrap();
    let extra = store.add_category(mentorship()).unwrap();
    store.toggle_category_status("2").unwrap();

    let active: Vec<&str> = store
        .active_categories()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(active, ["1", extra.id.as_str()]);
    assert!(store.active_categories().iter().all(|c| c.is_active()));
    assert!(store
        .active_categories()
        .iter()
        .all(|c| store.categories().contains(c)));
}

#[test]
fn form_validation_runs_before_store() {
    let input = NewCategory::new("", "Mentor Award");
    assert!(input.validate().is_err());

    let input = NewCategory::new("Mentorship", "Mentor Award");
    assert!(input.validate().is_ok());
}
