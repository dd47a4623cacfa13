// Surname-variant detection against in-memory trees.

use kinscan_core::config::{KinscanConfig, ScanMode};
use kinscan_core::types::PersonId;
use kinscan_detect::types::DetectError;
use kinscan_detect::{Anomaly, AnomalyKind, Oracle};

use crate::mock_tree::{male_line, smith_tree};

fn flagged(anomalies: &[Anomaly]) -> Vec<(&str, &str)> {
    anomalies
        .iter()
        .map(|a| (a.individual().id.as_str(), a.individual().surname.as_str()))
        .collect()
}

#[test]
fn test_home_analysis_flags_smyth_only() {
    let oracle = Oracle::new(Box::new(smith_tree()));
    let anomalies = oracle.analyze().unwrap();
    // Greta Jones and the maternal side are never compared.
    assert_eq!(flagged(&anomalies), vec![("@I4@", "Smyth")]);
    assert_eq!(anomalies[0].kind(), AnomalyKind::SurnameVariant);
    assert_eq!(anomalies[0].description(), "Surname variation: Smith vs. Smyth");
}

#[test]
fn test_mary_sees_her_father_only() {
    let oracle = Oracle::new(Box::new(smith_tree()));
    let mary = oracle.store().get_individual(&PersonId::from("@I3@")).unwrap();
    let anomalies = oracle.analyze_fraternal_surnames(&mary).unwrap();
    assert_eq!(flagged(&anomalies), vec![("@I6@", "Muller")]);
}

#[test]
fn test_full_tree_scan() {
    let config = KinscanConfig {
        scan: ScanMode::FullTree,
        ..Default::default()
    };
    let oracle = Oracle::with_config(Box::new(smith_tree()), &config);
    let anomalies = oracle.analyze().unwrap();
    assert_eq!(
        flagged(&anomalies),
        vec![("@I4@", "Smyth"), ("@I4@", "Smyth"), ("@I6@", "Muller")]
    );
    let targets: Vec<&str> = anomalies
        .iter()
        .map(|a| match a {
            Anomaly::SurnameVariant(v) => v.target.as_str(),
        })
        .collect();
    assert_eq!(targets, vec!["@I1@", "@I2@", "@I3@"]);
}

#[test]
fn test_full_tree_is_deterministic() {
    let config = KinscanConfig {
        scan: ScanMode::FullTree,
        ..Default::default()
    };
    let store = male_line(&["Smith", "Smyth", "Smithe", "Smit", "Schmidt", "Smith"]);
    let oracle = Oracle::with_config(Box::new(store), &config);
    let first = oracle.analyze().unwrap();
    for _ in 0..5 {
        assert_eq!(oracle.analyze().unwrap(), first);
    }
}

#[test]
fn test_long_line_keeps_walk_order() {
    let oracle = Oracle::new(Box::new(male_line(&[
        "Smith", "Smith", "Smyth", "Jones", "Smithe", "SMITH",
    ])));
    let found = oracle.analyze().unwrap();
    let surnames: Vec<&str> = found.iter().map(|a| a.individual().surname.as_str()).collect();
    // Jones scores too low; SMITH differs from Smith by case only.
    assert_eq!(surnames, vec!["Smyth", "Smithe"]);
}

#[test]
fn test_cyclic_tree_reports_error() {
    let mut store = male_line(&["Smith", "Smyth", "Smithe"]);
    store
        .link_parent(&PersonId::from("@L2@"), &PersonId::from("@L0@"))
        .unwrap();
    let oracle = Oracle::new(Box::new(store));
    assert!(matches!(
        oracle.analyze(),
        Err(DetectError::CycleDetected { .. })
    ));
}
