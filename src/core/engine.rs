use crate::domain::model::ScenarioResult;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn run(&mut self) -> Result<(ScenarioResult, String)> {
        tracing::info!("Starting commute analysis");
        self.monitor.log_stats("Start");

        let table = self.pipeline.extract()?;
        tracing::info!("Loaded {} commute records", table.len());
        self.monitor.log_stats("Load");

        let result = self.pipeline.transform(table)?;
        let scenario = result.scenario;
        tracing::info!(
            "Averaged {} commuters per day over {} records",
            scenario.total_commuters,
            scenario.record_count
        );
        self.monitor.log_stats("Aggregate");

        let chart_path = self.pipeline.load(result)?;
        tracing::info!("Chart saved to: {}", chart_path);
        self.monitor.log_stats("Report");
        self.monitor.log_final_stats();

        Ok((scenario, chart_path))
    }
}
