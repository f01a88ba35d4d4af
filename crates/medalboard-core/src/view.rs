//! # View Module
//!
//! State machines for the two data-backed views.
//!
//! ```text
//!   Loading ──data──► Ready
//!      │
//!      └──invalid / missing──► Redirected(NotFound)
//! ```
//!
//! Both terminal states ignore further input. A fresh navigation starts a
//! fresh machine. When the data never arrives the view stays `Loading`.

use crate::aggregate::{
    AggregateStats, CountryMedalTotal, CountryStats, Statistic, YearMedals, country_medal_totals,
    medals_by_year,
};
use crate::navigation::{Destination, parse_route_id, resolve_country};
use crate::record::CountryRecord;
use crate::CountryId;
use serde::Serialize;

// =============================================================================
// HOME VIEW
// =============================================================================

/// Everything the summary view displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSummary {
    pub stats: AggregateStats,
    pub tiles: Vec<Statistic>,
    pub medal_totals: Vec<CountryMedalTotal>,
}

impl HomeSummary {
    #[must_use]
    pub fn compute(countries: &[CountryRecord]) -> Self {
        let stats = AggregateStats::compute(countries);
        Self {
            stats,
            tiles: stats.home_tiles(),
            medal_totals: country_medal_totals(countries),
        }
    }
}

/// The summary view. It never redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeView {
    Loading,
    Ready(HomeSummary),
}

impl HomeView {
    #[must_use]
    pub fn activate() -> Self {
        Self::Loading
    }

    /// Data arrived: compute the summary.
    #[must_use]
    pub fn on_data(self, countries: &[CountryRecord]) -> Self {
        match self {
            Self::Loading => Self::Ready(HomeSummary::compute(countries)),
            ready @ Self::Ready(_) => ready,
        }
    }

    /// The fetch failed. No retry; the view keeps waiting.
    #[must_use]
    pub fn on_unavailable(self) -> Self {
        self
    }
}

// =============================================================================
// DETAIL VIEW
// =============================================================================

/// Everything the per-country view displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDetail {
    pub id: CountryId,
    pub country: String,
    pub stats: CountryStats,
    pub tiles: Vec<Statistic>,
    pub medals_by_year: Vec<YearMedals>,
}

impl CountryDetail {
    #[must_use]
    pub fn compute(record: &CountryRecord) -> Self {
        let stats = CountryStats::compute(record);
        Self {
            id: record.id,
            country: record.country.clone(),
            stats,
            tiles: stats.tiles(),
            medals_by_year: medals_by_year(record),
        }
    }
}

/// The per-country view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    /// Waiting for data for a syntactically valid id.
    Loading(CountryId),
    Ready(CountryDetail),
    Redirected(Destination),
}

impl DetailView {
    /// Start the view from a raw route parameter.
    ///
    /// An id that cannot name a country redirects before any fetch.
    #[must_use]
    pub fn activate(raw_id: &str) -> Self {
        match parse_route_id(raw_id) {
            Some(id) => Self::Loading(id),
            None => Self::Redirected(Destination::NotFound),
        }
    }

    /// Data arrived: look the id up.
    #[must_use]
    pub fn on_data(self, countries: &[CountryRecord]) -> Self {
        match self {
            Self::Loading(id) => match resolve_country(countries, id).record() {
                Some(record) => Self::Ready(CountryDetail::compute(record)),
                None => Self::Redirected(Destination::NotFound),
            },
            done => done,
        }
    }

    /// The fetch failed. No retry; the view keeps waiting.
    #[must_use]
    pub fn on_unavailable(self) -> Self {
        self
    }

    /// Whether this view still needs the dataset.
    #[must_use]
    pub fn needs_data(&self) -> bool {
        matches!(self, Self::Loading(_))
    }
}

// =============================================================================
// TESTS
// =============================================================================
