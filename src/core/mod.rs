pub mod aggregator;
pub mod engine;
pub mod loader;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{AnalysisResult, CommuteRecord, CommuteTable, ScenarioResult};
pub use crate::domain::ports::{ChartSettings, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
