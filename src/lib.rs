//! Financial dashboard chart renderer
//!
//! Reads financial metric series embedded as JSON-string attributes on page
//! placeholders and renders the fixed set of dashboard panels as PNG charts.
//!
//! Module organization:
//! - `dashboard`: page documents, decoding, panel registry, chart specs
//! - `render`: plotters chart backend
//! - `pipeline`: the one-shot rendering pass
//! - `config`: renderer configuration from document settings

pub mod config;
pub mod dashboard;
pub mod pipeline;
pub mod render;
