//! Dashboard core: page documents, decoding, and chart specifications
//!
//! Structure:
//! - `document.rs`: page document model and attribute extraction
//! - `decode.rs`: defensive JSON decoding with tagged outcomes
//! - `panels.rs`: the static panel registry (the data-driven table)
//! - `risk.rs`: constant risk-threshold reference series
//! - `spec.rs`: chart specification types handed to the renderer
//! - `result.rs`: rendered chart results and the index page
//! - `error.rs`: error types

pub mod decode;
pub mod document;
pub mod error;
pub mod panels;
pub mod result;
pub mod risk;
pub mod spec;

// Re-exports for convenience
pub use decode::{decode_labels, decode_numbers, Decoded, LabelsOutcome, SeriesOutcome};
pub use document::{PageDocument, Placeholder, SettingsReader};
pub use error::{DashboardError, Result};
pub use result::ChartResult;
pub use spec::{AxisOptions, ChartKind, ChartSpec, Rgba, Series};
