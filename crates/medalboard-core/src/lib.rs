//! # Medalboard Core
//!
//! The pure logic behind the Olympic participation dashboard.
//!
//! This crate contains:
//! - The data model (`CountryRecord`, `ParticipationRecord`)
//! - The Aggregator (edition count, totals, per-country series)
//! - The Navigation Validator (route ids and chart selections)
//! - The chart configuration builder and its registry
//! - The view state machines (`Loading -> Ready | Redirected`)
//!
//! Nothing here performs I/O. The app layer (apps/medalboard) fetches the
//! dataset and hands an immutable snapshot to these functions.

pub mod aggregate;
pub mod chart;
pub mod error;
pub mod formats;
pub mod navigation;
pub mod record;
pub mod view;

pub use aggregate::{
    AggregateStats, CountryMedalTotal, CountryStats, Statistic, Totals, YearMedals,
    country_medal_totals, edition_count, medals_by_year, totals,
};
pub use chart::{ChartConfig, ChartKind, ChartRegistry};
pub use error::MedalboardError;
pub use formats::{ValidationIssue, ValidationReport, parse_dataset, validate_dataset};
pub use navigation::{
    Destination, Resolution, parse_route_id, resolve_country, resolve_selection_index,
};
pub use record::{CountryRecord, ParticipationRecord};
pub use view::{CountryDetail, DetailView, HomeSummary, HomeView};

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Identifier of a country record.
///
/// Ids are positive in the dataset; `0` never names a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryId(pub i64);

impl CountryId {
    /// Whether this id can name a record at all.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Games year. Editions are identified by their year.
pub type Year = i32;
