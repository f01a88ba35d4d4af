//! # Record Module
//!
//! The country and participation records as they appear in the dataset.
//!
//! Records are deserialized leniently: a missing or `null` medal or athlete
//! count becomes `0` so that one bad row never poisons a whole dashboard.

use crate::{CountryId, Year};
use serde::{Deserialize, Deserializer, Serialize};

/// One country's single appearance at one edition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationRecord {
    /// Row identifier from the source, unused by computations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Edition year.
    pub year: Year,
    /// Host city, unused by computations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Medals won at this edition.
    #[serde(default, deserialize_with = "zero_if_absent")]
    pub medals_count: u64,
    /// Athletes sent to this edition.
    #[serde(default, deserialize_with = "zero_if_absent")]
    pub athlete_count: u64,
}

impl ParticipationRecord {
    /// Create a participation with only the fields the computations use.
    #[must_use]
    pub fn new(year: Year, medals_count: u64, athlete_count: u64) -> Self {
        Self {
            id: None,
            year,
            city: None,
            medals_count,
            athlete_count,
        }
    }
}

/// A country and its participations, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub id: CountryId,
    pub country: String,
    #[serde(default)]
    pub participations: Vec<ParticipationRecord>,
}

impl CountryRecord {
    /// Create a country record.
    #[must_use]
    pub fn new(
        id: i64,
        country: impl Into<String>,
        participations: Vec<ParticipationRecord>,
    ) -> Self {
        Self {
            id: CountryId(id),
            country: country.into(),
            participations,
        }
    }
}

/// Accepts a number, `null`, or a negative number and yields a count.
///
/// Negative and fractional values cannot be counts; they collapse to `0`
/// like absent ones.
fn zero_if_absent<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(serde_json::Value::as_u64).unwrap_or(0))
}

// =============================================================================
// TESTS
// =============================================================================
