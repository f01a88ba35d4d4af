//! Error types for Medalboard Core.

use crate::chart::ChartKind;
use thiserror::Error;

/// Errors raised by the core.
///
/// Missing entities are not errors: they resolve to
/// [`Resolution::NotFound`](crate::Resolution::NotFound) and the caller
/// redirects.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MedalboardError {
    /// The dataset could not be decoded into country records.
    #[error("malformed dataset: {0}")]
    MalformedDataset(String),

    /// A chart of this kind was requested before being registered.
    #[error("chart kind '{0}' is not registered")]
    ChartNotRegistered(ChartKind),
}
