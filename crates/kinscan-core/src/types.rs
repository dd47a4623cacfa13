use serde::{Deserialize, Serialize};

use crate::criteria::{Criteria, Criterion};

/// Opaque record identity, the GEDCOM cross-reference id (e.g. `@I1@`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        PersonId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        PersonId(s.to_string())
    }
}

/// Recorded sex of an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Unknown => "U",
        }
    }

    /// Map a GEDCOM `SEX` value. Anything other than `M`/`F` is unknown.
    pub fn from_sex(value: &str) -> Self {
        match value.trim() {
            "M" | "m" => Gender::Male,
            "F" | "f" => Gender::Female,
            _ => Gender::Unknown,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    pub id: PersonId,
    pub given_name: String,
    pub surname: String,
    pub gender: Gender,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

impl Individual {
    pub fn new(id: impl Into<String>, given_name: &str, surname: &str, gender: Gender) -> Self {
        Self {
            id: PersonId::new(id),
            given_name: given_name.to_string(),
            surname: surname.to_string(),
            gender,
            birth_year: None,
            death_year: None,
        }
    }

    /// `(given, surname)` pair.
    pub fn name(&self) -> (&str, &str) {
        (&self.given_name, &self.surname)
    }

    /// Display form, `Given Surname` with empty parts elided.
    pub fn full_name(&self) -> String {
        match (self.given_name.is_empty(), self.surname.is_empty()) {
            (false, false) => format!("{} {}", self.given_name, self.surname),
            (false, true) => self.given_name.clone(),
            (true, false) => self.surname.clone(),
            (true, true) => String::new(),
        }
    }

    /// True when every clause of `criteria` holds for this individual.
    pub fn criteria_match(&self, criteria: &Criteria) -> bool {
        criteria.clauses().iter().all(|c| match c {
            Criterion::Surname(s) => self.surname.contains(s.as_str()),
            Criterion::GivenName(s) => self.given_name.contains(s.as_str()),
            Criterion::Birth(y) => self.birth_year == Some(*y),
            Criterion::BirthRange(lo, hi) => self.birth_year.is_some_and(|y| *lo <= y && y <= *hi),
            Criterion::Death(y) => self.death_year == Some(*y),
            Criterion::DeathRange(lo, hi) => self.death_year.is_some_and(|y| *lo <= y && y <= *hi),
        })
    }
}

/// A family record linking spouses to their children.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Family {
    pub id: String,
    /// Spouses in record order (`HUSB`/`WIFE` as they appear).
    pub parents: Vec<PersonId>,
    pub children: Vec<PersonId>,
}

/// Any top-level record held by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Individual(Individual),
    Family(Family),
}

impl Element {
    pub fn is_individual(&self) -> bool {
        matches!(self, Element::Individual(_))
    }

    pub fn is_family(&self) -> bool {
        matches!(self, Element::Family(_))
    }

    pub fn as_individual(&self) -> Option<&Individual> {
        match self {
            Element::Individual(i) => Some(i),
            Element::Family(_) => None,
        }
    }

    pub fn as_family(&self) -> Option<&Family> {
        match self {
            Element::Family(f) => Some(f),
            Element::Individual(_) => None,
        }
    }

    /// Families never satisfy person criteria.
    pub fn criteria_match(&self, criteria: &Criteria) -> bool {
        self.as_individual()
            .is_some_and(|i| i.criteria_match(criteria))
    }
}

/// Errors raised by record stores.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Individual not found: {0}")]
    NotFound(PersonId),

    #[error("Malformed criteria `{criteria}`: {reason}")]
    MalformedCriteria { criteria: String, reason: String },

    #[error("Duplicate record id: {0}")]
    DuplicateId(String),
}
