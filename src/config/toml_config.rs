use crate::config::{AnalysisConfig, DEFAULT_CHART_PATH, DEFAULT_INPUT_PATH};
use crate::core::aggregator::DEFAULT_REDUCTION_FACTOR;
use crate::domain::ports::{ChartSettings, ConfigProvider};
use crate::utils::error::{CommuteError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub data: DataConfig,
    pub scenario: ScenarioConfig,
    pub chart: ChartConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub input_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub reduction_factor: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            reduction_factor: DEFAULT_REDUCTION_FACTOR,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    pub output_path: Option<String>,
    pub title: Option<String>,
    pub y_label: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CommuteError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CommuteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CommuteError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }

    pub fn to_analysis_config(&self) -> AnalysisConfig {
        let defaults = ChartSettings::default();
        AnalysisConfig {
            input_path: self.data.input_path.clone(),
            chart_path: self.chart_path().to_string(),
            reduction_factor: self.scenario.reduction_factor,
            chart: ChartSettings {
                title: self.chart.title.clone().unwrap_or(defaults.title),
                y_label: self.chart.y_label.clone().unwrap_or(defaults.y_label),
                width: self.chart.width.unwrap_or(defaults.width),
                height: self.chart.height.unwrap_or(defaults.height),
            },
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.data.input_path
    }

    fn chart_path(&self) -> &str {
        self.chart.output_path.as_deref().unwrap_or(DEFAULT_CHART_PATH)
    }

    fn reduction_factor(&self) -> f64 {
        self.scenario.reduction_factor
    }

    fn chart_settings(&self) -> ChartSettings {
        self.to_analysis_config().chart
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(CommuteError::InvalidConfigValueError {
                    field: "monitoring.log_level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }
        self.to_analysis_config().validate()
    }
}
