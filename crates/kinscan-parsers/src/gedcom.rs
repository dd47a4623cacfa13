//! GEDCOM 5.5 reader.
//!
//! Understands the subset of the format the analysis needs: `INDI` records
//! (`NAME`, `GIVN`/`SURN`, `SEX`, `BIRT`/`DEAT` `DATE`) and `FAM` records
//! (`HUSB`, `WIFE`, `CHIL`). Every other tag is skipped.
//!
//! Individuals keep their file order. Families are inserted after all
//! individuals so their links always resolve.

use std::path::{Path, PathBuf};

use kinscan_core::memory::MemoryRecordStore;
use kinscan_core::types::{Family, Gender, Individual, PersonId, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum GedcomError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One physical GEDCOM line: `level [@xref@] TAG [value]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GedcomLine<'a> {
    pub level: u32,
    pub xref: Option<&'a str>,
    pub tag: &'a str,
    pub value: &'a str,
}

/// Split a single line into its parts. `line_no` is 1-based, for errors only.
pub fn parse_line(line: &str, line_no: usize) -> Result<GedcomLine<'_>, GedcomError> {
    let malformed = |reason: &str| GedcomError::Malformed {
        line: line_no,
        reason: reason.to_string(),
    };

    let line = line.trim_start();
    let (level, rest) = line
        .split_once(' ')
        .ok_or_else(|| malformed("expected `level TAG`"))?;
    let level: u32 = level
        .parse()
        .map_err(|_| malformed(&format!("invalid level `{level}`")))?;

    let rest = rest.trim_start();
    let (xref, rest) = if rest.starts_with('@') {
        match rest.split_once(' ') {
            Some((xref, rest)) => (Some(xref), rest.trim_start()),
            None => return Err(malformed("cross-reference without a tag")),
        }
    } else {
        (None, rest)
    };

    let (tag, value) = match rest.split_once(' ') {
        Some((tag, value)) => (tag, value),
        None => (rest, ""),
    };
    if tag.is_empty() {
        return Err(malformed("missing tag"));
    }

    Ok(GedcomLine {
        level,
        xref,
        tag,
        value,
    })
}

#[derive(Debug, Default)]
struct IndividualBuilder {
    id: String,
    /// Number of `NAME` lines seen so far.
    names: u32,
    given: Option<String>,
    surname: Option<String>,
    gender: Option<Gender>,
    birth_year: Option<i32>,
    death_year: Option<i32>,
    /// A `DATE` was already seen under `BIRT` / `DEAT`, year or not.
    birth_dated: bool,
    death_dated: bool,
}

impl IndividualBuilder {
    fn build(self) -> Individual {
        Individual {
            id: PersonId(self.id),
            given_name: self.given.unwrap_or_default(),
            surname: self.surname.unwrap_or_default(),
            gender: self.gender.unwrap_or(Gender::Unknown),
            birth_year: self.birth_year,
            death_year: self.death_year,
        }
    }
}

#[derive(Debug)]
enum Record {
    Individual(IndividualBuilder),
    Family(Family),
    Other,
}

/// Split `Given /Surname/ Suffix` into given name and surname.
pub fn split_name(value: &str) -> (String, String) {
    let mut parts = value.split('/');
    let given = parts.next().unwrap_or("").trim().to_string();
    let surname = parts.next().unwrap_or("").trim().to_string();
    (given, surname)
}

/// Year from a GEDCOM date value: its last token, if that is a four-digit number.
pub fn date_year(value: &str) -> Option<i32> {
    let last = value.split_whitespace().last()?;
    if last.len() == 4 && last.bytes().all(|b| b.is_ascii_digit()) {
        last.parse().ok()
    } else {
        None
    }
}

/// Streaming GEDCOM reader producing a `MemoryRecordStore`.
#[derive(Debug, Default)]
pub struct GedcomParser {
    records: Vec<Record>,
    /// Level-1 tag the current line is nested under (e.g. `BIRT`, `NAME`).
    context: Option<String>,
}

impl GedcomParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a GEDCOM file.
    pub fn parse_file(path: &Path) -> Result<MemoryRecordStore, GedcomError> {
        let content = std::fs::read_to_string(path).map_err(|source| GedcomError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::parse_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            individuals = store.individual_count(),
            families = store.family_count(),
            "loaded gedcom"
        );
        Ok(store)
    }

    pub fn parse_str(content: &str) -> Result<MemoryRecordStore, GedcomError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut parser = Self::new();
        for (i, raw) in content.lines().enumerate() {
            let raw = raw.trim_end_matches('\r');
            if raw.trim().is_empty() {
                continue;
            }
            parser.feed(parse_line(raw, i + 1)?);
        }
        parser.finish()
    }

    fn feed(&mut self, line: GedcomLine<'_>) {
        if line.level == 0 {
            self.context = None;
            self.records.push(match (line.tag, line.xref) {
                ("INDI", Some(xref)) => Record::Individual(IndividualBuilder {
                    id: xref.to_string(),
                    ..Default::default()
                }),
                ("FAM", Some(xref)) => Record::Family(Family {
                    id: xref.to_string(),
                    ..Default::default()
                }),
                ("INDI" | "FAM", None) => {
                    tracing::warn!(tag = line.tag, "record without cross-reference id skipped");
                    Record::Other
                }
                _ => Record::Other,
            });
            return;
        }

        if line.level == 1 {
            self.context = Some(line.tag.to_string());
        }
        let context = self.context.as_deref();

        match self.records.last_mut() {
            Some(Record::Individual(ind)) => match (line.level, line.tag, context) {
                // Only the primary (first) name is used.
                (1, "NAME", _) => {
                    ind.names += 1;
                    if ind.names == 1 {
                        let (given, surname) = split_name(line.value);
                        ind.given = Some(given);
                        ind.surname = Some(surname);
                    }
                }
                (2, "GIVN", Some("NAME")) if ind.names == 1 => {
                    ind.given = Some(line.value.trim().to_string());
                }
                (2, "SURN", Some("NAME")) if ind.names == 1 => {
                    ind.surname = Some(line.value.trim().to_string());
                }
                (1, "SEX", _) => ind.gender = Some(Gender::from_sex(line.value)),
                (2, "DATE", Some("BIRT")) if !ind.birth_dated => {
                    ind.birth_dated = true;
                    ind.birth_year = date_year(line.value);
                }
                (2, "DATE", Some("DEAT")) if !ind.death_dated => {
                    ind.death_dated = true;
                    ind.death_year = date_year(line.value);
                }
                _ => {}
            },
            Some(Record::Family(fam)) => match (line.level, line.tag) {
                (1, "HUSB" | "WIFE") => fam.parents.push(PersonId::new(line.value.trim())),
                (1, "CHIL") => fam.children.push(PersonId::new(line.value.trim())),
                _ => {}
            },
            Some(Record::Other) | None => {}
        }
    }

    fn finish(self) -> Result<MemoryRecordStore, GedcomError> {
        let mut store = MemoryRecordStore::new();
        let mut families = Vec::new();

        for record in self.records {
            match record {
                Record::Individual(ind) => store.add_individual(ind.build())?,
                Record::Family(fam) => families.push(fam),
                Record::Other => {}
            }
        }
        for fam in families {
            store.add_family(fam)?;
        }

        if store.has_parent_cycle() {
            tracing::warn!("parent links form a cycle; ancestor traversal will report it");
        }
        Ok(store)
    }
}

#[cfg(test)]
#[path = "gedcom_tests.rs"]
mod tests;
