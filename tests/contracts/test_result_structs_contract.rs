/// JSON shape of the result structs printed by `--json`.
///
/// Every result carries `version` and `command`; optional years are omitted
/// rather than serialized as null.
use kinscan_detect::types::{AncestorResult, FindResult, HomeResult, IndividualInfo};
use kinscan_detect::Oracle;

use crate::mock_tree::smith_tree;

fn oracle() -> Oracle {
    Oracle::new(Box::new(smith_tree()))
}

#[test]
fn test_analysis_result_json() {
    let report = oracle().report().unwrap();
    let v = serde_json::to_value(&report).unwrap();

    assert_eq!(v["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(v["command"], "analyze");
    assert_eq!(v["status"], "anomalies");
    assert_eq!(v["scan"], "home");
    assert_eq!(v["individuals_scanned"], 1);
    assert_eq!(v["home"]["id"], "@I1@");
    assert_eq!(v["home"]["gender"], "male");

    let anomaly = &v["anomalies"][0];
    assert_eq!(anomaly["kind"], "surname_variant");
    assert_eq!(anomaly["target"], "@I1@");
    assert_eq!(anomaly["target_surname"], "Smith");
    assert_eq!(anomaly["ancestor_surname"], "Smyth");
    assert_eq!(anomaly["score"], 80);
    assert_eq!(anomaly["individual"]["id"], "@I4@");
}

#[test]
fn test_individual_info_omits_unknown_years() {
    let o = oracle();
    let mut tom = o.store().get_individual(&"@I1@".into()).unwrap();
    tom.birth_year = None;
    let v = serde_json::to_value(IndividualInfo::from(&tom)).unwrap();
    assert!(v.get("birth_year").is_none());
    assert!(v.get("death_year").is_none());
    assert_eq!(v["surname"], "Smith");
}

#[test]
fn test_other_results_carry_version_and_command() {
    let o = oracle();
    let home = o.find_home_individual().unwrap();
    let info = IndividualInfo::from(&home);

    let values = [
        serde_json::to_value(HomeResult {
            version: env!("CARGO_PKG_VERSION").into(),
            command: "home".into(),
            home: Some(info.clone()),
        })
        .unwrap(),
        serde_json::to_value(AncestorResult {
            version: env!("CARGO_PKG_VERSION").into(),
            command: "ancestors".into(),
            line: "paternal".into(),
            root: info.clone(),
            ancestors: vec![],
        })
        .unwrap(),
        serde_json::to_value(FindResult {
            version: env!("CARGO_PKG_VERSION").into(),
            command: "find".into(),
            criteria: "surname=Smith".into(),
            found: Some(info),
        })
        .unwrap(),
    ];
    for v in &values {
        assert!(v["version"].is_string());
        assert!(v["command"].is_string());
    }
}

#[test]
fn test_analysis_result_round_trips() {
    let report = oracle().report().unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let back: kinscan_detect::types::AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.anomalies, report.anomalies);
    assert_eq!(back.home, report.home);
}
