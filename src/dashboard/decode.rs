//! Defensive JSON decoding of attribute values
//!
//! Every metric attribute is a string that should contain a JSON array.
//! Decoding distinguishes four outcomes: the attribute was absent, it was
//! present but empty, it held something that is not a JSON array of the
//! expected element type, or it decoded cleanly. The first three all
//! normalize to an empty sequence for rendering; keeping them apart lets the
//! pipeline report *why* a series is blank.
//!
//! Each attribute decodes independently. A malformed value never affects any
//! other series — the failure is confined to the one attribute it came from.

use serde::de::DeserializeOwned;

/// Outcome of decoding one attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    /// The attribute was not present on the placeholder
    Absent,
    /// The attribute was present but empty
    Empty,
    /// The attribute held something other than a JSON array of `T`
    Invalid(String),
    /// Successfully decoded values, in attribute order
    Values(Vec<T>),
}

/// Decoded numeric series
pub type SeriesOutcome = Decoded<f64>;

/// Decoded category labels (the shared year axis)
pub type LabelsOutcome = Decoded<String>;

impl<T> Decoded<T> {
    /// The decoded values; empty for every non-`Values` outcome
    pub fn values(&self) -> &[T] {
        match self {
            Decoded::Values(v) => v,
            _ => &[],
        }
    }

    /// Consume the outcome, yielding the values or an empty vector
    pub fn into_values(self) -> Vec<T> {
        match self {
            Decoded::Values(v) => v,
            _ => Vec::new(),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Decoded::Invalid(_))
    }

    /// Short human-readable tag for progress lines
    pub fn describe(&self) -> String {
        match self {
            Decoded::Absent => "absent".to_string(),
            Decoded::Empty => "empty".to_string(),
            Decoded::Invalid(_) => "invalid".to_string(),
            Decoded::Values(v) => format!("{} values", v.len()),
        }
    }
}

/// Decode an attribute into a numeric series
pub fn decode_numbers(raw: Option<&str>) -> SeriesOutcome {
    decode_array(raw)
}

/// Decode an attribute into category labels
pub fn decode_labels(raw: Option<&str>) -> LabelsOutcome {
    decode_array(raw)
}

fn decode_array<T: DeserializeOwned>(raw: Option<&str>) -> Decoded<T> {
    let raw = match raw {
        None => return Decoded::Absent,
        Some(s) => s,
    };
    if raw.is_empty() {
        return Decoded::Empty;
    }
    match serde_json::from_str::<Vec<T>>(raw) {
        Ok(values) => Decoded::Values(values),
        Err(e) => Decoded::Invalid(e.to_string()),
    }
}
