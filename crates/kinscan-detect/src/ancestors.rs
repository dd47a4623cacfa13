//! Gender-filtered ancestor traversal.
//!
//! A paternal line is every ancestor reachable through fathers only; a
//! maternal line, through mothers only. A parent of the other gender prunes
//! the walk: neither it nor its own ancestors are visited.

use std::collections::HashSet;

use kinscan_core::store::RecordStore;
use kinscan_core::types::{Gender, Individual, PersonId};

use crate::types::DetectError;

/// Which single-gender line to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lineage {
    Paternal,
    Maternal,
}

impl Lineage {
    pub fn gender(&self) -> Gender {
        match self {
            Lineage::Paternal => Gender::Male,
            Lineage::Maternal => Gender::Female,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Lineage::Paternal => "paternal",
            Lineage::Maternal => "maternal",
        }
    }
}

impl std::fmt::Display for Lineage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Lineage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paternal" | "male" | "m" => Ok(Lineage::Paternal),
            "maternal" | "female" | "f" => Ok(Lineage::Maternal),
            other => Err(format!("unknown line `{other}` (expected paternal or maternal)")),
        }
    }
}

struct Frame {
    parents: Vec<Individual>,
    next: usize,
}

fn matching_parents(
    store: &dyn RecordStore,
    individual: &Individual,
    gender: Gender,
) -> Result<Vec<Individual>, DetectError> {
    Ok(store
        .get_parents(individual)?
        .into_iter()
        .filter(|p| p.gender == gender)
        .collect())
}

/// Collect the ancestors of `individual` whose gender is `gender`.
///
/// Depth-first, parent before that parent's own ancestors, parents visited in
/// store order. Uses an explicit stack; an individual met again on the current
/// path is a cycle and fails with [`DetectError::CycleDetected`]. The same
/// ancestor reached along two different paths is listed twice.
pub fn find_ancestors(
    store: &dyn RecordStore,
    individual: &Individual,
    gender: Gender,
) -> Result<Vec<Individual>, DetectError> {
    if gender == Gender::Unknown {
        return Err(DetectError::UnsupportedGender(gender));
    }

    let mut line = Vec::new();
    // Identities on the current root-to-frame path; `path_order` mirrors the
    // stack so the top can be removed when its frame is exhausted.
    let mut on_path: HashSet<PersonId> = HashSet::from([individual.id.clone()]);
    let mut path_order: Vec<PersonId> = vec![individual.id.clone()];
    let mut stack = vec![Frame {
        parents: matching_parents(store, individual, gender)?,
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(parent) = frame.parents.get(frame.next).cloned() else {
            stack.pop();
            if let Some(done) = path_order.pop() {
                on_path.remove(&done);
            }
            continue;
        };
        frame.next += 1;

        if on_path.contains(&parent.id) {
            return Err(DetectError::CycleDetected { id: parent.id });
        }

        let grandparents = matching_parents(store, &parent, gender)?;
        on_path.insert(parent.id.clone());
        path_order.push(parent.id.clone());
        line.push(parent);
        stack.push(Frame {
            parents: grandparents,
            next: 0,
        });
    }

    tracing::debug!(
        root = %individual.id,
        gender = %gender,
        ancestors = line.len(),
        "ancestor walk finished"
    );
    Ok(line)
}

/// Ancestors through fathers only.
pub fn find_paternal_ancestors(
    store: &dyn RecordStore,
    individual: &Individual,
) -> Result<Vec<Individual>, DetectError> {
    find_ancestors(store, individual, Gender::Male)
}

/// Ancestors through mothers only.
pub fn find_maternal_ancestors(
    store: &dyn RecordStore,
    individual: &Individual,
) -> Result<Vec<Individual>, DetectError> {
    find_ancestors(store, individual, Gender::Female)
}

#[cfg(test)]
#[path = "ancestors_tests.rs"]
mod tests;
