//! Page document model and attribute extraction
//!
//! A page document is the serialized form of the dashboard page: an ordered
//! list of placeholders, each carrying the metric series for one panel as
//! named string attributes, plus an optional settings map for the renderer.
//! Attribute values are either empty or JSON-encoded arrays *as strings* —
//! the upstream generation step writes them exactly as they would appear in
//! the page markup, and decoding happens later (see `decode`).

use super::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One chart placeholder: an element id plus its named string attributes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Placeholder {
    pub id: String,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl Placeholder {
    /// Raw attribute value, or None when the attribute is absent.
    ///
    /// An attribute that is present but empty is returned as `Some("")`;
    /// the decoder distinguishes the two outcomes.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }
}

/// A loaded dashboard page: placeholders plus renderer settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageDocument {
    #[serde(default)]
    pub placeholders: Vec<Placeholder>,
    #[serde(default)]
    pub settings: HashMap<String, String>,
}

impl PageDocument {
    /// Parse a page document from a JSON string
    pub fn from_str(json: &str) -> Result<Self> {
        let doc: PageDocument = serde_json::from_str(json)?;

        // Duplicate ids would make placeholder lookup ambiguous
        let mut seen = std::collections::HashSet::new();
        for placeholder in &doc.placeholders {
            if !seen.insert(placeholder.id.as_str()) {
                return Err(DashboardError::Document(format!(
                    "duplicate placeholder id '{}'",
                    placeholder.id
                )));
            }
        }

        Ok(doc)
    }

    /// Load a page document from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_str(&json)
    }

    /// Look up a placeholder by element id
    ///
    /// A missing placeholder is the fatal template-out-of-sync error: the
    /// caller is expected to propagate it and stop the rendering pass.
    pub fn placeholder(&self, id: &str) -> Result<&Placeholder> {
        self.placeholders
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DashboardError::MissingPlaceholder(id.to_string()))
    }

    /// Typed reader over the document's settings map
    pub fn settings_reader(&self) -> SettingsReader<'_> {
        SettingsReader {
            settings: &self.settings,
        }
    }
}

/// Reads renderer settings with type-safe conversions and explicit defaults
///
/// An empty value means "not set" — templates emit empty strings for
/// untouched settings, so empty and absent are treated the same here.
pub struct SettingsReader<'a> {
    settings: &'a HashMap<String, String>,
}

impl<'a> SettingsReader<'a> {
    /// Build a reader over a bare settings map (used by tests and the demo)
    pub fn new(settings: &'a HashMap<String, String>) -> Self {
        Self { settings }
    }

    /// Get raw setting value (None if not set or empty)
    fn get_raw(&self, name: &str) -> Option<&str> {
        self.settings.get(name).and_then(|v| {
            if v.is_empty() {
                None // Empty string = not set
            } else {
                Some(v.as_str())
            }
        })
    }

    /// Get string setting with explicit default
    pub fn get_string(&self, name: &str, default: &str) -> String {
        self.get_raw(name).unwrap_or(default).to_string()
    }

    /// Get i32 setting with validation and explicit default
    pub fn get_i32(&self, name: &str, default: i32) -> i32 {
        self.get_raw(name)
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or_else(|| {
                if let Some(raw) = self.get_raw(name) {
                    eprintln!(
                        "⚠ Invalid integer value for setting '{}': '{}', using default: {}",
                        name, raw, default
                    );
                }
                default
            })
    }

    /// Get boolean setting (handles "true"/"false" strings) with explicit default
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        match self.get_raw(name) {
            Some("true") => true,
            Some("false") => false,
            Some(other) => {
                eprintln!(
                    "⚠ Invalid boolean value for setting '{}': '{}', using default: {}",
                    name, other, default
                );
                default
            }
            None => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> PageDocument {
        PageDocument::from_str(
            r#"{
                "placeholders": [
                    {
                        "id": "SaleChart",
                        "attributes": {
                            "data-year": "[\"1399\",\"1400\",\"1401\"]",
                            "data-net-sale": "[100,200,300]",
                            "data-empty": ""
                        }
                    },
                    { "id": "InventoryChart" }
                ],
                "settings": { "chart.width": "1200", "chart.height": "" }
            }"#,
        )
        .expect("sample document parses")
    }

    #[test]
    fn test_placeholder_lookup() {
        let doc = sample_doc();
        assert!(doc.placeholder("SaleChart").is_ok());
        assert!(doc.placeholder("InventoryChart").is_ok());
    }

    #[test]
    fn test_missing_placeholder_is_error() {
        let doc = sample_doc();
        let err = doc.placeholder("DebtChart").unwrap_err();
        match err {
            DashboardError::MissingPlaceholder(id) => assert_eq!(id, "DebtChart"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_attribute_absent_vs_empty() {
        let doc = sample_doc();
        let sale = doc.placeholder("SaleChart").unwrap();
        assert_eq!(sale.attribute("data-net-sale"), Some("[100,200,300]"));
        assert_eq!(sale.attribute("data-empty"), Some(""));
        assert_eq!(sale.attribute("data-nope"), None);

        // A placeholder without an attributes map has only absent attributes
        let inventory = doc.placeholder("InventoryChart").unwrap();
        assert_eq!(inventory.attribute("data-inventory"), None);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = PageDocument::from_str(
            r#"{ "placeholders": [ { "id": "SaleChart" }, { "id": "SaleChart" } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, DashboardError::Document(_)));
    }

    #[test]
    fn test_settings_reader_defaults() {
        let doc = sample_doc();
        let reader = doc.settings_reader();
        assert_eq!(reader.get_string("chart.width", "auto"), "1200");
        // Empty value = not set
        assert_eq!(reader.get_string("chart.height", "auto"), "auto");
        assert_eq!(reader.get_i32("chart.width", 800), 1200);
        assert!(reader.get_bool("index.page", true));
    }

    #[test]
    fn test_settings_reader_empty_map() {
        let settings = HashMap::new();
        let reader = SettingsReader::new(&settings);
        assert_eq!(reader.get_string("foo", "default"), "default");
        assert_eq!(reader.get_i32("bar", 42), 42);
        assert!(reader.get_bool("baz", true));
    }
}
