// GEDCOM text -> store -> oracle, end to end.

use kinscan_detect::Oracle;
use kinscan_parsers::{GedcomError, GedcomParser};

use crate::common::{write_gedcom, CLEAN_GEDCOM, SAMPLE_GEDCOM};

#[test]
fn test_sample_file_home_and_anomaly() {
    let (_dir, path) = write_gedcom(SAMPLE_GEDCOM);
    let store = GedcomParser::parse_file(&path).unwrap();
    let oracle = Oracle::new(Box::new(store));

    let home = oracle.find_home_individual().unwrap();
    assert_eq!(home.full_name(), "Tom Smith");
    assert_eq!(home.birth_year, Some(1902));

    let anomalies = oracle.analyze().unwrap();
    assert_eq!(anomalies.len(), 1);
    assert_eq!(anomalies[0].individual().id.as_str(), "@I4@");
    assert_eq!(anomalies[0].individual().death_year, Some(1901));
}

#[test]
fn test_sample_file_ancestor_lines() {
    let store = GedcomParser::parse_str(SAMPLE_GEDCOM).unwrap();
    let oracle = Oracle::new(Box::new(store));
    let home = oracle.find_home_individual().unwrap();

    let paternal: Vec<String> = oracle
        .find_paternal_ancestors(&home)
        .unwrap()
        .iter()
        .map(|i| i.full_name())
        .collect();
    assert_eq!(paternal, vec!["John Smith", "William Smyth"]);

    let maternal: Vec<String> = oracle
        .find_maternal_ancestors(&home)
        .unwrap()
        .iter()
        .map(|i| i.full_name())
        .collect();
    assert_eq!(maternal, vec!["Mary Miller"]);
}

#[test]
fn test_sample_file_find() {
    let store = GedcomParser::parse_str(SAMPLE_GEDCOM).unwrap();
    let oracle = Oracle::new(Box::new(store));
    let mary = oracle
        .find_individual("birthrange=1850-1860:surname=Miller")
        .unwrap()
        .unwrap();
    assert_eq!(mary.id.as_str(), "@I3@");
    assert!(oracle.find_individual("surname=Nobody").unwrap().is_none());
}

#[test]
fn test_clean_file_has_no_anomalies() {
    let store = GedcomParser::parse_str(CLEAN_GEDCOM).unwrap();
    let oracle = Oracle::new(Box::new(store));
    // Mary Smyth is on the maternal side, so she is never compared.
    assert!(oracle.analyze().unwrap().is_empty());
    assert_eq!(oracle.store().individuals().count(), 3);
}

#[test]
fn test_empty_file() {
    let store = GedcomParser::parse_str("0 HEAD\n0 TRLR\n").unwrap();
    let oracle = Oracle::new(Box::new(store));
    assert!(oracle.find_home_individual().is_none());
    assert!(oracle.analyze().unwrap().is_empty());
}

#[test]
fn test_malformed_line_reports_line_number() {
    let err = GedcomParser::parse_str("0 @I1@ INDI\nNAME Tom /Smith/\n").unwrap_err();
    assert!(matches!(err, GedcomError::Malformed { line: 2, .. }));
}
