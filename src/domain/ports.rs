use crate::domain::model::{AnalysisResult, CommuteTable};
use crate::utils::error::Result;

pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    /// Creates missing parent directories and overwrites existing files.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSettings {
    pub title: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            title: "Average Commute Time Before and After AI-Powered Transit".to_string(),
            y_label: "Minutes".to_string(),
            width: 640,
            height: 480,
        }
    }
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn chart_path(&self) -> &str;
    fn reduction_factor(&self) -> f64;
    fn chart_settings(&self) -> ChartSettings {
        ChartSettings::default()
    }
}

pub trait Pipeline {
    fn extract(&self) -> Result<CommuteTable>;
    fn transform(&self, table: CommuteTable) -> Result<AnalysisResult>;
    fn load(&self, result: AnalysisResult) -> Result<String>;
}
