use kinscan_core::types::Individual;
use kinscan_detect::anomaly::Anomaly;
use kinscan_detect::types::IndividualInfo;

/// `@I1@ Tom Smith (1850-1910)`; years are omitted when unknown.
pub(crate) fn format_person(info: &IndividualInfo) -> String {
    let mut out = format!("{} {}", info.id, display_name(&info.given_name, &info.surname));
    match (info.birth_year, info.death_year) {
        (Some(b), Some(d)) => out.push_str(&format!(" ({}-{})", b, d)),
        (Some(b), None) => out.push_str(&format!(" (b. {})", b)),
        (None, Some(d)) => out.push_str(&format!(" (d. {})", d)),
        (None, None) => {}
    }
    out
}

pub(crate) fn format_anomaly_human(a: &Anomaly) -> String {
    let who: &Individual = a.individual();
    format!(
        "[{}] {} {}: {}\n",
        a.kind(),
        who.id,
        display_name(&who.given_name, &who.surname),
        a.description(),
    )
}

fn display_name(given: &str, surname: &str) -> String {
    match (given.is_empty(), surname.is_empty()) {
        (true, true) => "(unnamed)".to_string(),
        (true, false) => surname.to_string(),
        (false, true) => given.to_string(),
        (false, false) => format!("{} {}", given, surname),
    }
}
