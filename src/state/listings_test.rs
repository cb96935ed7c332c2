use super::*;

use listings::Violation;

fn record(id: i64, name: &str) -> PropertyRecord {
    PropertyRecord::new(id, name, "House", 100.0).unwrap()
}

fn ids(state: &ListingsState) -> Vec<u64> {
    state.items.iter().map(PropertyRecord::id).collect()
}

#[test]
fn listings_state_defaults() {
    let s = ListingsState::default();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
    assert!(s.rejected.is_empty());
}

#[test]
fn from_records_preserves_insertion_order() {
    let s = ListingsState::from_records([record(3, "A"), record(1, "B"), record(2, "C")]);
    assert_eq!(ids(&s), vec![3, 1, 2]);
    assert!(s.rejected.is_empty());
}

#[test]
fn from_records_empty_sequence_is_empty_list() {
    let s = ListingsState::from_records(Vec::new());
    assert!(s.is_empty());
    assert!(s.rejected.is_empty());
}

#[test]
fn from_results_skips_invalid_and_keeps_the_rest() {
    let s = ListingsState::from_results([
        Ok(record(1, "A")),
        PropertyRecord::new(-1, "", "House", -5.0),
        Ok(record(2, "B")),
    ]);
    assert_eq!(ids(&s), vec![1, 2]);
    assert_eq!(s.rejected.len(), 1);
    assert_eq!(s.rejected[0].position, 1);
    assert_eq!(
        s.rejected[0].error.violations(),
        &[Violation::NegativeId(-1), Violation::EmptyName, Violation::NegativePrice(-5.0)]
    );
}

#[test]
fn from_results_rejects_repeated_ids() {
    let s = ListingsState::from_records([record(1, "A"), record(2, "B"), record(1, "Again")]);
    assert_eq!(ids(&s), vec![1, 2]);
    assert_eq!(s.items[0].name(), "A");
    assert_eq!(
        s.rejected,
        vec![RejectedRecord { position: 2, error: RecordError::DuplicateId { id: 1 } }]
    );
}

#[test]
fn invalid_record_does_not_reserve_its_id() {
    let s = ListingsState::from_results([PropertyRecord::new(5, "", "House", 1.0), Ok(record(5, "Real"))]);
    assert_eq!(ids(&s), vec![5]);
    assert_eq!(s.rejected.len(), 1);
}

#[test]
fn from_catalog_json_bad_document_yields_empty_list() {
    let s = ListingsState::from_catalog_json("not json");
    assert_eq!(s, ListingsState::default());
}

#[test]
fn from_catalog_json_reports_malformed_entries() {
    let s = ListingsState::from_catalog_json(
        r#"[{"Id":1,"Name":"A","Type":"House","Price":1},{"Name":"no id"}]"#,
    );
    assert_eq!(ids(&s), vec![1]);
    assert_eq!(s.rejected[0].position, 1);
    assert!(matches!(s.rejected[0].error, RecordError::Malformed(_)));
}

#[test]
fn embedded_catalog_loads_cleanly() {
    let s = ListingsState::load();
    assert!(s.rejected.is_empty());
    assert_eq!(ids(&s), vec![1, 2, 3]);

    let first = &s.items[0];
    assert_eq!(first.name(), "Prabhu House");
    assert_eq!(first.kind(), "House");
    assert!((first.price() - 12000.0).abs() < f64::EPSILON);
}
