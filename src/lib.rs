pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::LocalStorage;
#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, RunSettings};
pub use config::{toml_config::TomlConfig, AnalysisConfig};
pub use core::{engine::AnalysisEngine, pipeline::CommutePipeline};
pub use domain::model::{CommuteRecord, CommuteTable, ScenarioResult};
pub use utils::error::{CommuteError, Result};
