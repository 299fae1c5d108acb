#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::aggregator::DEFAULT_REDUCTION_FACTOR;
use crate::domain::ports::{ChartSettings, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_range, Validate,
};

pub const DEFAULT_INPUT_PATH: &str = "data/sample_transit_data.csv";
pub const DEFAULT_CHART_PATH: &str = "results/commute_time_comparison.png";

pub const MIN_CHART_SIDE: u32 = 100;
pub const MAX_CHART_SIDE: u32 = 4000;

/// Resolved settings for one run. Paths are relative to the storage root.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub input_path: String,
    pub chart_path: String,
    pub reduction_factor: f64,
    pub chart: ChartSettings,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            chart_path: DEFAULT_CHART_PATH.to_string(),
            reduction_factor: DEFAULT_REDUCTION_FACTOR,
            chart: ChartSettings::default(),
        }
    }
}

impl ConfigProvider for AnalysisConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn chart_path(&self) -> &str {
        &self.chart_path
    }

    fn reduction_factor(&self) -> f64 {
        self.reduction_factor
    }

    fn chart_settings(&self) -> ChartSettings {
        self.chart.clone()
    }
}

impl Validate for AnalysisConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("chart_path", &self.chart_path)?;
        validate_file_extension("chart_path", &self.chart_path, &["png"])?;
        validate_range("reduction_factor", self.reduction_factor, 0.0, 1.0)?;
        validate_non_empty_string("chart.title", &self.chart.title)?;
        validate_non_empty_string("chart.y_label", &self.chart.y_label)?;
        validate_range("chart.width", self.chart.width, MIN_CHART_SIDE, MAX_CHART_SIDE)?;
        validate_range("chart.height", self.chart.height, MIN_CHART_SIDE, MAX_CHART_SIDE)?;
        Ok(())
    }
}
