//! Renderer configuration from page-document settings
//!
//! Settings travel in the page document's `settings` map as named strings,
//! the same convention as the placeholder attributes: an empty value means
//! "not set" and falls back to the default here.

use crate::dashboard::SettingsReader;

/// Default chart height in pixels when `chart.height` is auto
const DEFAULT_HEIGHT: i32 = 600;

/// Chart dimension - either explicit pixels or "auto"
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChartDimension {
    #[default]
    Auto,
    Pixels(i32),
}

impl ChartDimension {
    /// Parse from a setting value
    ///
    /// Valid formats:
    /// - "auto" or "" (empty) → Auto
    /// - "1500" → Pixels(1500) if in valid range [100, 10000]
    pub fn from_str(value: &str, default: ChartDimension) -> Self {
        let trimmed = value.trim();

        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            return ChartDimension::Auto;
        }

        match trimmed.parse::<i32>() {
            Ok(px) if (100..=10000).contains(&px) => ChartDimension::Pixels(px),
            Ok(px) => {
                eprintln!(
                    "⚠ Chart dimension {} out of valid range [100-10000], using default: {:?}",
                    px, default
                );
                default
            }
            Err(_) => {
                eprintln!(
                    "⚠ Invalid chart dimension '{}', using default: {:?}",
                    trimmed, default
                );
                default
            }
        }
    }

    /// Resolve a width to actual pixels
    ///
    /// For Auto: grows with the category count:
    /// - base_size (800px) + (n_categories - 1) * size_per_category (120px)
    /// - Capped at max_size (2400px)
    pub fn resolve(&self, n_categories: usize) -> i32 {
        match self {
            ChartDimension::Pixels(px) => *px,
            ChartDimension::Auto => {
                const BASE_SIZE: i32 = 800;
                const SIZE_PER_CATEGORY: i32 = 120;
                const MAX_SIZE: i32 = 2400;

                let computed =
                    BASE_SIZE + (n_categories.saturating_sub(1) as i32 * SIZE_PER_CATEGORY);
                computed.min(MAX_SIZE)
            }
        }
    }

    /// Resolve to pixels with a flat fallback (heights don't scale with
    /// the category count)
    pub fn resolve_fixed(&self, fallback: i32) -> i32 {
        match self {
            ChartDimension::Pixels(px) => *px,
            ChartDimension::Auto => fallback,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Chart width (pixels or Auto)
    pub chart_width: ChartDimension,

    /// Chart height (pixels or Auto)
    pub chart_height: ChartDimension,

    /// Write the dashboard.html index page after a successful pass
    pub index_page: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            chart_width: ChartDimension::Auto,
            chart_height: ChartDimension::Auto,
            index_page: true,
        }
    }
}

impl RendererConfig {
    /// Create config from page-document settings
    pub fn from_settings(reader: &SettingsReader<'_>) -> Self {
        let chart_width =
            ChartDimension::from_str(&reader.get_string("chart.width", "auto"), ChartDimension::Auto);

        let chart_height = ChartDimension::from_str(
            &reader.get_string("chart.height", "auto"),
            ChartDimension::Auto,
        );

        let index_page = reader.get_bool("index.page", true);

        Self {
            chart_width,
            chart_height,
            index_page,
        }
    }

    /// Resolve chart dimensions to actual pixels for a given category count
    pub fn resolve_dimensions(&self, n_categories: usize) -> (u32, u32) {
        let width = self.chart_width.resolve(n_categories);
        let height = self.chart_height.resolve_fixed(DEFAULT_HEIGHT);
        (width as u32, height as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_chart_dimension_auto() {
        let dim = ChartDimension::from_str("auto", ChartDimension::Auto);
        assert_eq!(dim, ChartDimension::Auto);
        assert_eq!(dim.resolve(1), 800);
        assert_eq!(dim.resolve(3), 1040);
        assert_eq!(dim.resolve(50), 2400); // Capped at max
    }

    #[test]
    fn test_chart_dimension_empty_string() {
        let dim = ChartDimension::from_str("", ChartDimension::Auto);
        assert_eq!(dim, ChartDimension::Auto);
    }

    #[test]
    fn test_chart_dimension_pixels() {
        let dim = ChartDimension::from_str("1500", ChartDimension::Auto);
        assert_eq!(dim, ChartDimension::Pixels(1500));
        assert_eq!(dim.resolve(10), 1500); // Ignores category count
    }

    #[test]
    fn test_chart_dimension_invalid() {
        let dim = ChartDimension::from_str("abc", ChartDimension::Auto);
        assert_eq!(dim, ChartDimension::Auto); // Falls back to default
    }

    #[test]
    fn test_chart_dimension_out_of_range() {
        // Too small
        let dim = ChartDimension::from_str("50", ChartDimension::Auto);
        assert_eq!(dim, ChartDimension::Auto);

        // Too large
        let dim = ChartDimension::from_str("20000", ChartDimension::Auto);
        assert_eq!(dim, ChartDimension::Auto);
    }

    #[test]
    fn test_chart_dimension_edge_cases() {
        // Minimum valid
        let dim = ChartDimension::from_str("100", ChartDimension::Auto);
        assert_eq!(dim, ChartDimension::Pixels(100));

        // Maximum valid
        let dim = ChartDimension::from_str("10000", ChartDimension::Auto);
        assert_eq!(dim, ChartDimension::Pixels(10000));
    }

    #[test]
    fn test_config_defaults() {
        let settings = HashMap::new();
        let reader = SettingsReader::new(&settings);
        let config = RendererConfig::from_settings(&reader);
        assert_eq!(config.chart_width, ChartDimension::Auto);
        assert_eq!(config.chart_height, ChartDimension::Auto);
        assert!(config.index_page);

        let (w, h) = config.resolve_dimensions(3);
        assert_eq!((w, h), (1040, 600));
    }

    #[test]
    fn test_config_explicit_settings() {
        let mut settings = HashMap::new();
        settings.insert("chart.width".to_string(), "1200".to_string());
        settings.insert("chart.height".to_string(), "500".to_string());
        settings.insert("index.page".to_string(), "false".to_string());
        let reader = SettingsReader::new(&settings);
        let config = RendererConfig::from_settings(&reader);

        assert_eq!(config.resolve_dimensions(3), (1200, 500));
        assert!(!config.index_page);
    }
}
