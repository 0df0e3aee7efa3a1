//! Bankruptcy risk-threshold reference series
//!
//! The bankruptcy panel plots the computed Altman score against three
//! constant bands: scores above 4 are low risk, scores around 3 are middling,
//! and scores below 1.8 signal high bankruptcy risk. The bands are synthetic
//! series sized to the shared year axis so they span the whole chart.

/// Risk band plotted as a constant reference series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Mid,
    High,
}

impl RiskLevel {
    /// The constant plotted for this band
    pub fn value(self) -> f64 {
        match self {
            RiskLevel::Low => 4.0,
            RiskLevel::Mid => 3.0,
            RiskLevel::High => 1.8,
        }
    }
}

/// Constant-valued series for one risk band, sized to the year-label count
pub fn threshold_series(level: RiskLevel, len: usize) -> Vec<f64> {
    vec![level.value(); len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_values() {
        assert_eq!(RiskLevel::Low.value(), 4.0);
        assert_eq!(RiskLevel::Mid.value(), 3.0);
        assert_eq!(RiskLevel::High.value(), 1.8);
    }

    #[test]
    fn test_threshold_series_matches_label_count() {
        for level in [RiskLevel::Low, RiskLevel::Mid, RiskLevel::High] {
            let series = threshold_series(level, 3);
            assert_eq!(series.len(), 3);
            assert!(series.iter().all(|&v| v == level.value()));
        }
    }

    #[test]
    fn test_threshold_series_empty_labels() {
        assert!(threshold_series(RiskLevel::Mid, 0).is_empty());
    }
}
