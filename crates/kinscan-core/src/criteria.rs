//! Criteria expressions for individual search.
//!
//! An expression is a `:`-separated list of `key=value` clauses, all of which
//! must hold:
//! - `surname=NAME`: NAME appears anywhere in the surname
//! - `name=NAME`: NAME appears anywhere in the given name
//! - `birth=YYYY` / `death=YYYY`: exact year
//! - `birthrange=Y1-Y2` / `deathrange=Y1-Y2`: year within `Y1..=Y2`

use std::str::FromStr;

use crate::types::StoreError;

/// A single parsed clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    Surname(String),
    GivenName(String),
    Birth(i32),
    BirthRange(i32, i32),
    Death(i32),
    DeathRange(i32, i32),
}

/// A conjunction of clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    clauses: Vec<Criterion>,
}

impl Criteria {
    pub fn clauses(&self) -> &[Criterion] {
        &self.clauses
    }
}

impl FromStr for Criteria {
    type Err = StoreError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| StoreError::MalformedCriteria {
            criteria: text.to_string(),
            reason,
        };

        if text.trim().is_empty() {
            return Err(malformed("empty expression".to_string()));
        }

        let mut clauses = Vec::new();
        for clause in text.split(':') {
            let (key, value) = clause
                .split_once('=')
                .ok_or_else(|| malformed(format!("clause `{clause}` is not key=value")))?;
            let criterion = match key.trim() {
                "surname" => Criterion::Surname(value.to_string()),
                "name" => Criterion::GivenName(value.to_string()),
                "birth" => Criterion::Birth(parse_year(value).map_err(malformed)?),
                "death" => Criterion::Death(parse_year(value).map_err(malformed)?),
                "birthrange" => {
                    let (lo, hi) = parse_range(value).map_err(malformed)?;
                    Criterion::BirthRange(lo, hi)
                }
                "deathrange" => {
                    let (lo, hi) = parse_range(value).map_err(malformed)?;
                    Criterion::DeathRange(lo, hi)
                }
                other => return Err(malformed(format!("unknown key `{other}`"))),
            };
            clauses.push(criterion);
        }

        Ok(Criteria { clauses })
    }
}

fn parse_year(value: &str) -> Result<i32, String> {
    let value = value.trim();
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("`{value}` is not a four-digit year"));
    }
    value
        .parse()
        .map_err(|e| format!("`{value}` is not a year: {e}"))
}

fn parse_range(value: &str) -> Result<(i32, i32), String> {
    let (lo, hi) = value
        .split_once('-')
        .ok_or_else(|| format!("range `{value}` is not YEAR-YEAR"))?;
    Ok((parse_year(lo)?, parse_year(hi)?))
}
