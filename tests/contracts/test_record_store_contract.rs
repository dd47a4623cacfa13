/// Contract tests for the RecordStore trait via MemoryRecordStore.
///
/// The detectors only see a store through `&dyn RecordStore`, so every check
/// here goes through the trait object.
use kinscan_core::memory::MemoryRecordStore;
use kinscan_core::store::RecordStore;
use kinscan_core::types::{Element, Gender, Individual, PersonId, StoreError};

use crate::mock_tree::{family, smith_tree};

fn ids(people: &[Individual]) -> Vec<&str> {
    people.iter().map(|i| i.id.as_str()).collect()
}

// ---------------------------------------------------------------------------
// element_list / individuals
// ---------------------------------------------------------------------------

#[test]
fn test_element_list_keeps_insertion_order() {
    let store = smith_tree();
    let dyn_store: &dyn RecordStore = &store;
    let kinds: Vec<bool> = dyn_store
        .element_list()
        .iter()
        .map(Element::is_individual)
        .collect();
    assert_eq!(kinds, vec![true, true, true, true, true, true, true, false, false, false]);

    let people: Vec<&str> = dyn_store.individuals().map(|i| i.id.as_str()).collect();
    assert_eq!(people, vec!["@I1@", "@I2@", "@I3@", "@I4@", "@I5@", "@I6@", "@I7@"]);
}

#[test]
fn test_empty_store() {
    let store = MemoryRecordStore::new();
    let dyn_store: &dyn RecordStore = &store;
    assert!(dyn_store.element_list().is_empty());
    assert_eq!(dyn_store.individuals().count(), 0);
}

// ---------------------------------------------------------------------------
// get_individual
// ---------------------------------------------------------------------------

#[test]
fn test_get_individual() {
    let store = smith_tree();
    let dyn_store: &dyn RecordStore = &store;
    let mary = dyn_store.get_individual(&PersonId::from("@I3@")).unwrap();
    assert_eq!(mary.name(), ("Mary", "Miller"));
    assert_eq!(mary.gender, Gender::Female);
    assert!(dyn_store.get_individual(&PersonId::from("@I99@")).is_none());
}

// ---------------------------------------------------------------------------
// get_parents
// ---------------------------------------------------------------------------

#[test]
fn test_get_parents_in_record_order() {
    let store = smith_tree();
    let dyn_store: &dyn RecordStore = &store;
    let tom = dyn_store.get_individual(&"@I1@".into()).unwrap();
    assert_eq!(ids(&dyn_store.get_parents(&tom).unwrap()), vec!["@I2@", "@I3@"]);

    let william = dyn_store.get_individual(&"@I4@".into()).unwrap();
    assert!(dyn_store.get_parents(&william).unwrap().is_empty());
}

#[test]
fn test_get_parents_of_foreign_individual() {
    let store = smith_tree();
    let dyn_store: &dyn RecordStore = &store;
    let stranger = Individual::new("@X1@", "Nobody", "Known", Gender::Male);
    assert_eq!(
        dyn_store.get_parents(&stranger),
        Err(StoreError::NotFound(PersonId::from("@X1@")))
    );
}

#[test]
fn test_family_with_unknown_reference_links_the_rest() {
    let mut store = MemoryRecordStore::new();
    store
        .add_individual(Individual::new("@I1@", "Tom", "Smith", Gender::Male))
        .unwrap();
    store
        .add_individual(Individual::new("@I2@", "John", "Smith", Gender::Male))
        .unwrap();
    store
        .add_family(family("@F1@", &["@I2@", "@GHOST@"], &["@I1@"]))
        .unwrap();

    let dyn_store: &dyn RecordStore = &store;
    let tom = dyn_store.get_individual(&"@I1@".into()).unwrap();
    assert_eq!(ids(&dyn_store.get_parents(&tom).unwrap()), vec!["@I2@"]);
    assert_eq!(dyn_store.element_list().len(), 3);
}

#[test]
fn test_duplicate_ids_rejected() {
    let mut store = smith_tree();
    assert_eq!(
        store.add_individual(Individual::new("@I1@", "Tom", "Again", Gender::Male)),
        Err(StoreError::DuplicateId("@I1@".into()))
    );
    assert_eq!(
        store.add_family(family("@F1@", &[], &[])),
        Err(StoreError::DuplicateId("@F1@".into()))
    );
}

// ---------------------------------------------------------------------------
// parse_criteria
// ---------------------------------------------------------------------------

#[test]
fn test_parse_criteria_default_grammar() {
    let store = smith_tree();
    let dyn_store: &dyn RecordStore = &store;
    let criteria = dyn_store
        .parse_criteria("birthrange=1850-1860:surname=Miller")
        .unwrap();
    let matches: Vec<&str> = dyn_store
        .element_list()
        .iter()
        .filter(|e| e.criteria_match(&criteria))
        .filter_map(Element::as_individual)
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(matches, vec!["@I3@"]);
}

#[test]
fn test_parse_criteria_malformed() {
    let store = smith_tree();
    let dyn_store: &dyn RecordStore = &store;
    for bad in ["", "surname", "born=1850", "birth=18x0", "birthrange=1850"] {
        assert!(
            matches!(
                dyn_store.parse_criteria(bad),
                Err(StoreError::MalformedCriteria { .. })
            ),
            "expected malformed criteria for {bad:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// cycle audit
// ---------------------------------------------------------------------------

#[test]
fn test_has_parent_cycle() {
    let mut store = smith_tree();
    assert!(!store.has_parent_cycle());
    store
        .link_parent(&PersonId::from("@I4@"), &PersonId::from("@I1@"))
        .unwrap();
    assert!(store.has_parent_cycle());
}
