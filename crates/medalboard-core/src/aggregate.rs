//! # Aggregate Module
//!
//! The Aggregator: pure reductions from a loaded collection of
//! `CountryRecord` to dashboard statistics and chart series.
//!
//! Every function here:
//! - Is a single pass over an immutable snapshot
//! - Tolerates an empty collection (zero-state dashboard)
//! - Never fails and never panics (saturating sums)
//!
//! Series keep the input order. The pie chart's slice index is mapped back to
//! a country by position, so reordering here would navigate to the wrong
//! country.

use crate::record::{CountryRecord, ParticipationRecord};
use crate::Year;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// SERIES TYPES
// =============================================================================

/// Total medals of one country, in the same position as its record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryMedalTotal {
    pub country: String,
    pub total: u64,
}

/// Medals won by one country at one edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMedals {
    pub year: Year,
    pub medals: u64,
}

/// Sums across the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub participations: u64,
    pub medals: u64,
    pub athletes: u64,
}

/// A labelled figure shown as a dashboard tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistic {
    pub label: String,
    pub value: u64,
}

impl Statistic {
    #[must_use]
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

// =============================================================================
// AGGREGATOR OPERATIONS
// =============================================================================

/// Number of distinct editions: the size of the union of every year.
///
/// Two countries at the same Games count once.
#[must_use]
pub fn edition_count(countries: &[CountryRecord]) -> usize {
    countries
        .iter()
        .flat_map(|c| c.participations.iter().map(|p| p.year))
        .collect::<BTreeSet<Year>>()
        .len()
}

/// Participation, medal and athlete sums across all countries.
#[must_use]
pub fn totals(countries: &[CountryRecord]) -> Totals {
    countries.iter().fold(Totals::default(), |acc, country| {
        let own = country_totals(&country.participations);
        Totals {
            participations: acc.participations.saturating_add(own.participations),
            medals: acc.medals.saturating_add(own.medals),
            athletes: acc.athletes.saturating_add(own.athletes),
        }
    })
}

/// Medal total per country, preserving input order.
#[must_use]
pub fn country_medal_totals(countries: &[CountryRecord]) -> Vec<CountryMedalTotal> {
    countries
        .iter()
        .map(|c| CountryMedalTotal {
            country: c.country.clone(),
            total: medal_sum(&c.participations),
        })
        .collect()
}

/// One country's (year, medals) pairs in participation order.
///
/// The series is not re-sorted: the source lists participations
/// chronologically and the chart shows them as given.
#[must_use]
pub fn medals_by_year(country: &CountryRecord) -> Vec<YearMedals> {
    country
        .participations
        .iter()
        .map(|p| YearMedals {
            year: p.year,
            medals: p.medals_count,
        })
        .collect()
}

fn medal_sum(participations: &[ParticipationRecord]) -> u64 {
    participations
        .iter()
        .fold(0u64, |sum, p| sum.saturating_add(p.medals_count))
}

fn country_totals(participations: &[ParticipationRecord]) -> Totals {
    participations.iter().fold(
        Totals {
            participations: participations.len() as u64,
            ..Totals::default()
        },
        |acc, p| Totals {
            medals: acc.medals.saturating_add(p.medals_count),
            athletes: acc.athletes.saturating_add(p.athlete_count),
            ..acc
        },
    )
}

// =============================================================================
// AGGREGATE STATS
// =============================================================================

/// Read-only snapshot of the summary figures.
///
/// This is the one place the home statistics are derived; views never
/// re-derive them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub edition_count: u64,
    pub country_count: u64,
    pub total_participations: u64,
    pub total_medals: u64,
    pub total_athletes: u64,
}

impl AggregateStats {
    /// Compute every figure from scratch.
    #[must_use]
    pub fn compute(countries: &[CountryRecord]) -> Self {
        let sums = totals(countries);
        Self {
            edition_count: edition_count(countries) as u64,
            country_count: countries.len() as u64,
            total_participations: sums.participations,
            total_medals: sums.medals,
            total_athletes: sums.athletes,
        }
    }

    /// Tiles shown on the home view.
    #[must_use]
    pub fn home_tiles(&self) -> Vec<Statistic> {
        vec![
            Statistic::new("Number of Games", self.edition_count),
            Statistic::new("Number of countries", self.country_count),
        ]
    }

    /// Every figure as a tile, for the statistics listing.
    #[must_use]
    pub fn all_tiles(&self) -> Vec<Statistic> {
        vec![
            Statistic::new("Number of Games", self.edition_count),
            Statistic::new("Number of countries", self.country_count),
            Statistic::new("Number of participations", self.total_participations),
            Statistic::new("Number of medals", self.total_medals),
            Statistic::new("Number of athletes", self.total_athletes),
        ]
    }
}

/// Figures for a single country's detail view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryStats {
    pub participations: u64,
    pub medals: u64,
    pub athletes: u64,
}

impl CountryStats {
    #[must_use]
    pub fn compute(country: &CountryRecord) -> Self {
        let own = country_totals(&country.participations);
        Self {
            participations: own.participations,
            medals: own.medals,
            athletes: own.athletes,
        }
    }

    #[must_use]
    pub fn tiles(&self) -> Vec<Statistic> {
        vec![
            Statistic::new("Number of entries", self.participations),
            Statistic::new("Total number of medals", self.medals),
            Statistic::new("Total number of athletes", self.athletes),
        ]
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Vec<CountryRecord> {
        vec![
            CountryRecord::new(
                1,
                "France",
                vec![
                    ParticipationRecord::new(2000, 10, 50),
                    ParticipationRecord::new(2004, 5, 40),
                ],
            ),
            CountryRecord::new(2, "Italy", vec![ParticipationRecord::new(2000, 8, 30)]),
        ]
    }

    #[test]
    fn sample_scenario_figures() {
        let stats = AggregateStats::compute(&sample());

        assert_eq!(stats.edition_count, 2);
        assert_eq!(stats.country_count, 2);
        assert_eq!(stats.total_participations, 3);
        assert_eq!(stats.total_medals, 23);
        assert_eq!(stats.total_athletes, 120);
    }

    #[test]
    fn sample_scenario_medal_totals() {
        let totals = country_medal_totals(&sample());
        assert_eq!(
            totals,
            vec![
                CountryMedalTotal {
                    country: "France".into(),
                    total: 15
                },
                CountryMedalTotal {
                    country: "Italy".into(),
                    total: 8
                },
            ]
        );
    }

    #[test]
    fn empty_collection_is_zero_state() {
        assert_eq!(edition_count(&[]), 0);
        assert!(country_medal_totals(&[]).is_empty());
        assert_eq!(totals(&[]), Totals::default());
        assert_eq!(AggregateStats::compute(&[]), AggregateStats::default());
    }

    #[test]
    fn shared_years_collapse_into_one_edition() {
        let countries = vec![
            CountryRecord::new(1, "A", vec![ParticipationRecord::new(2012, 1, 1)]),
            CountryRecord::new(2, "B", vec![ParticipationRecord::new(2012, 1, 1)]),
            CountryRecord::new(3, "C", vec![ParticipationRecord::new(2016, 1, 1)]),
        ];
        assert_eq!(edition_count(&countries), 2);
    }

    #[test]
    fn medals_by_year_keeps_participation_order() {
        let country = CountryRecord::new(
            5,
            "Spain",
            vec![
                ParticipationRecord::new(2016, 17, 312),
                ParticipationRecord::new(2012, 20, 315),
            ],
        );

        let series = medals_by_year(&country);
        assert_eq!(
            series,
            vec![
                YearMedals {
                    year: 2016,
                    medals: 17
                },
                YearMedals {
                    year: 2012,
                    medals: 20
                },
            ]
        );
    }

    #[test]
    fn country_stats_match_detail_figures() {
        let countries = sample();
        let stats = CountryStats::compute(&countries[0]);

        assert_eq!(stats.participations, 2);
        assert_eq!(stats.medals, 15);
        assert_eq!(stats.athletes, 90);
        assert_eq!(stats.tiles()[1].value, 15);
    }

    #[test]
    fn sums_saturate_instead_of_overflowing() {
        let countries = vec![
            CountryRecord::new(1, "A", vec![ParticipationRecord::new(2000, u64::MAX, 0)]),
            CountryRecord::new(2, "B", vec![ParticipationRecord::new(2004, 1, 0)]),
        ];
        assert_eq!(totals(&countries).medals, u64::MAX);
    }

    #[test]
    fn home_tiles_show_games_and_countries() {
        let tiles = AggregateStats::compute(&sample()).home_tiles();
        assert_eq!(tiles[0], Statistic::new("Number of Games", 2));
        assert_eq!(tiles[1], Statistic::new("Number of countries", 2));
    }

    fn arb_countries() -> impl Strategy<Value = Vec<CountryRecord>> {
        let participation = (1896i32..2024, 0u64..200, 0u64..800)
            .prop_map(|(year, medals, athletes)| ParticipationRecord::new(year, medals, athletes));
        let country = (1i64..1000, "[A-Z][a-z]{2,10}", prop::collection::vec(participation, 0..8))
            .prop_map(|(id, name, participations)| CountryRecord::new(id, name, participations));
        prop::collection::vec(country, 0..12)
    }

    proptest! {
        #[test]
        fn participations_equal_sum_of_lengths(countries in arb_countries()) {
            let expected: u64 = countries.iter().map(|c| c.participations.len() as u64).sum();
            prop_assert_eq!(totals(&countries).participations, expected);
        }

        #[test]
        fn medal_totals_line_up_with_input(countries in arb_countries()) {
            let series = country_medal_totals(&countries);
            prop_assert_eq!(series.len(), countries.len());
            for (entry, record) in series.iter().zip(&countries) {
                prop_assert_eq!(&entry.country, &record.country);
                let expected: u64 = record.participations.iter().map(|p| p.medals_count).sum();
                prop_assert_eq!(entry.total, expected);
            }
        }

        #[test]
        fn aggregation_is_idempotent(countries in arb_countries()) {
            prop_assert_eq!(AggregateStats::compute(&countries), AggregateStats::compute(&countries));
            prop_assert_eq!(country_medal_totals(&countries), country_medal_totals(&countries));
        }

        #[test]
        fn editions_never_exceed_participations(countries in arb_countries()) {
            let stats = AggregateStats::compute(&countries);
            prop_assert!(stats.edition_count <= stats.total_participations);
        }
    }
}
