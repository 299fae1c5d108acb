use crate::core::{aggregator, loader, report};
use crate::domain::model::{AnalysisResult, CommuteTable};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;
use std::io::Write;

/// Loader → aggregator → reporter over a storage backend and a config source.
pub struct CommutePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CommutePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Same as `load`, with the report going to `out` instead of stdout.
    pub fn load_into<W: Write>(&self, result: AnalysisResult, out: &mut W) -> Result<String> {
        let chart_path = self.config.chart_path();

        report::write_report(out, &result.scenario)?;

        let png = report::render_chart(&result.scenario, &self.config.chart_settings())?;
        tracing::debug!("Writing chart ({} bytes) to {}", png.len(), chart_path);
        self.storage.write_file(chart_path, &png)?;

        Ok(chart_path.to_string())
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CommutePipeline<S, C> {
    fn extract(&self) -> Result<CommuteTable> {
        let input_path = self.config.input_path();
        tracing::debug!("Loading commute records from {}", input_path);
        loader::load_table(&self.storage, input_path)
    }

    fn transform(&self, mut table: CommuteTable) -> Result<AnalysisResult> {
        let scenario = aggregator::summarize(&mut table, self.config.reduction_factor())?;
        Ok(AnalysisResult { table, scenario })
    }

    fn load(&self, result: AnalysisResult) -> Result<String> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.load_into(result, &mut out)
    }
}
