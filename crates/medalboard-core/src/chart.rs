//! # Chart Module
//!
//! Binds Aggregator series into chart configurations.
//!
//! The output serializes to the object shape Chart.js expects
//! (`type`, `data`, `options`). Rendering happens in the browser; this module
//! only decides labels, values and presentation options.
//!
//! Chart kinds must be registered on a [`ChartRegistry`] before use. The
//! composition root builds the registry once and shares it.

use crate::aggregate::{CountryMedalTotal, YearMedals};
use crate::error::MedalboardError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Slice colors for the medal pie, cycled when there are more countries.
pub const PIE_PALETTE: [&str; 5] = ["#956065", "#B8CBE7", "#89A1DB", "#793D52", "#9780A1"];

const LINE_BORDER: &str = "rgba(75, 192, 192, 1)";
const LINE_BACKGROUND: &str = "rgba(75, 192, 192, 0.2)";

// =============================================================================
// CHART KINDS AND REGISTRY
// =============================================================================

/// Supported chart representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Line,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pie => write!(f, "pie"),
            Self::Line => write!(f, "line"),
        }
    }
}

/// The set of chart kinds the dashboard may build.
#[derive(Debug, Clone, Default)]
pub struct ChartRegistry {
    kinds: BTreeSet<ChartKind>,
}

impl ChartRegistry {
    /// An empty registry. Nothing can be built until kinds are registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every kind the dashboard uses.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ChartKind::Pie);
        registry.register(ChartKind::Line);
        registry
    }

    /// Register a kind. Registering twice is a no-op.
    pub fn register(&mut self, kind: ChartKind) {
        self.kinds.insert(kind);
    }

    #[must_use]
    pub fn is_registered(&self, kind: ChartKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Registered kinds, in a stable order.
    pub fn kinds(&self) -> impl Iterator<Item = ChartKind> + '_ {
        self.kinds.iter().copied()
    }

    fn require(&self, kind: ChartKind) -> Result<(), MedalboardError> {
        if self.is_registered(kind) {
            Ok(())
        } else {
            Err(MedalboardError::ChartNotRegistered(kind))
        }
    }

    /// Pie of total medals per country. Slice `i` is country `i`.
    pub fn medals_pie(&self, totals: &[CountryMedalTotal]) -> Result<ChartConfig, MedalboardError> {
        self.require(ChartKind::Pie)?;

        let colors = (0..totals.len())
            .map(|i| PIE_PALETTE[i % PIE_PALETTE.len()].to_string())
            .collect();

        Ok(ChartConfig {
            kind: ChartKind::Pie,
            data: ChartData {
                labels: totals.iter().map(|t| t.country.clone()).collect(),
                datasets: vec![ChartDataset {
                    label: String::from("Total medals"),
                    data: totals.iter().map(|t| t.total).collect(),
                    background_color: Colors::Each(colors),
                    border_color: None,
                    fill: None,
                }],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                plugins: Some(Plugins {
                    legend: Legend {
                        display: true,
                        position: String::from("top"),
                    },
                }),
                scales: None,
            },
        })
    }

    /// Line of medals per edition for one country.
    pub fn medals_line(&self, series: &[YearMedals]) -> Result<ChartConfig, MedalboardError> {
        self.require(ChartKind::Line)?;

        Ok(ChartConfig {
            kind: ChartKind::Line,
            data: ChartData {
                labels: series.iter().map(|p| p.year.to_string()).collect(),
                datasets: vec![ChartDataset {
                    label: String::from("Medals per year"),
                    data: series.iter().map(|p| p.medals).collect(),
                    background_color: Colors::Single(LINE_BACKGROUND.to_string()),
                    border_color: Some(LINE_BORDER.to_string()),
                    fill: Some(false),
                }],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                plugins: None,
                scales: Some(Scales {
                    y: Axis {
                        begin_at_zero: true,
                    },
                }),
            },
        })
    }
}

// =============================================================================
// CONFIGURATION SHAPE
// =============================================================================

/// A complete chart configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Number of labelled points (slices for a pie).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.labels.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<u64>,
    pub background_color: Colors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

/// One color for the whole dataset, or one per point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Colors {
    Single(String),
    Each(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Plugins>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    pub display: bool,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
}

// =============================================================================
// TESTS
// =============================================================================
