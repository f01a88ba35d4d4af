//! # Formats Module
//!
//! Dataset decoding and sanity checks.
//!
//! This module contains:
//! - JSON decoding of the country collection
//! - An informational validation report
//!
//! Note: fetching the bytes (file or HTTP) remains in the app layer
//! (apps/medalboard). This module only handles pure transformations.

mod dataset;

pub use dataset::*;
