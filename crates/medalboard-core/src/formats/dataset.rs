//! JSON dataset decoding and validation.

use crate::error::MedalboardError;
use crate::record::CountryRecord;
use crate::CountryId;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Decode the country collection from JSON bytes.
///
/// The top level must be an array of country records. Counts that are missing
/// or `null` decode as `0`.
pub fn parse_dataset(bytes: &[u8]) -> Result<Vec<CountryRecord>, MedalboardError> {
    serde_json::from_slice(bytes).map_err(|e| MedalboardError::MalformedDataset(e.to_string()))
}

/// A problem found in an otherwise decodable dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// Two or more records share an id; lookups only ever reach the first.
    DuplicateId { id: CountryId, positions: Vec<usize> },
    /// An id that no route can reach.
    NonPositiveId { position: usize, id: CountryId },
    EmptyCountryName { position: usize },
    NoParticipations { id: CountryId },
    /// A participation whose medal or athlete count was absent or unusable.
    CoercedCount {
        id: CountryId,
        year: Option<i64>,
        field: &'static str,
    },
}

/// Findings of [`validate_dataset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub countries: usize,
    pub participations: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check raw JSON bytes for problems the lenient decoder would hide.
///
/// Coerced counts can only be detected on the raw document, so this works on
/// bytes rather than on decoded records.
pub fn validate_dataset(bytes: &[u8]) -> Result<ValidationReport, MedalboardError> {
    let countries = parse_dataset(bytes)?;
    let raw: Value =
        serde_json::from_slice(bytes).map_err(|e| MedalboardError::MalformedDataset(e.to_string()))?;

    let mut report = ValidationReport {
        countries: countries.len(),
        participations: countries.iter().map(|c| c.participations.len()).sum(),
        issues: Vec::new(),
    };

    let mut positions: BTreeMap<CountryId, Vec<usize>> = BTreeMap::new();
    for (position, country) in countries.iter().enumerate() {
        positions.entry(country.id).or_default().push(position);

        if !country.id.is_valid() {
            report.issues.push(ValidationIssue::NonPositiveId {
                position,
                id: country.id,
            });
        }
        if country.country.trim().is_empty() {
            report.issues.push(ValidationIssue::EmptyCountryName { position });
        }
        if country.participations.is_empty() {
            report
                .issues
                .push(ValidationIssue::NoParticipations { id: country.id });
        }
    }

    for (id, at) in positions {
        if at.len() > 1 {
            report.issues.push(ValidationIssue::DuplicateId { id, positions: at });
        }
    }

    let raw_countries = raw.as_array().map(Vec::as_slice).unwrap_or_default();
    for (country, raw_country) in countries.iter().zip(raw_countries) {
        let raw_participations = raw_country
            .get("participations")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        for participation in raw_participations {
            for field in ["medalsCount", "athleteCount"] {
                let usable = participation.get(field).and_then(Value::as_u64).is_some();
                if !usable {
                    report.issues.push(ValidationIssue::CoercedCount {
                        id: country.id,
                        year: participation.get("year").and_then(Value::as_i64),
                        field,
                    });
                }
            }
        }
    }

    Ok(report)
}

// =============================================================================
// TESTS
// =============================================================================
