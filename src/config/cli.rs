use crate::config::toml_config::TomlConfig;
use crate::config::AnalysisConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "commute-sim")]
#[command(about = "Projects average commute time under AI-powered pod transit")]
pub struct CliConfig {
    #[arg(long, help = "CSV file with commuting records [default: data/sample_transit_data.csv]")]
    pub input: Option<String>,

    #[arg(long, help = "Where to write the PNG chart [default: results/commute_time_comparison.png]")]
    pub output: Option<String>,

    #[arg(long, help = "Share of commute time removed, 0.0-1.0 [default: 0.3]")]
    pub reduction: Option<f64>,

    #[arg(long, help = "TOML configuration file; --input, --output and --reduction still take precedence")]
    pub config: Option<String>,

    #[arg(long, default_value = ".", help = "Directory relative paths are resolved against")]
    pub base_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory between stages")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

/// Everything `main` needs after flags and the optional TOML file are merged.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub analysis: AnalysisConfig,
    pub base_dir: String,
    pub monitor: bool,
    pub log_level: Option<String>,
    /// Flags that replaced a value from the `--config` file.
    pub overridden_flags: Vec<&'static str>,
}

impl CliConfig {
    /// Merges the optional TOML file with the flags. Flags given on the
    /// command line win over the file, the file wins over built-in defaults.
    pub fn resolve(&self) -> Result<RunSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                let toml = TomlConfig::from_file(path)?;
                toml.validate()?;
                RunSettings {
                    analysis: toml.to_analysis_config(),
                    base_dir: self.base_dir.clone(),
                    monitor: self.monitor || toml.monitoring_enabled(),
                    log_level: toml.log_level().map(str::to_string),
                    overridden_flags: Vec::new(),
                }
            }
            None => RunSettings {
                analysis: AnalysisConfig::default(),
                base_dir: self.base_dir.clone(),
                monitor: self.monitor,
                log_level: None,
                overridden_flags: Vec::new(),
            },
        };

        let mut overridden = Vec::new();
        if let Some(input) = &self.input {
            settings.analysis.input_path = input.clone();
            overridden.push("--input");
        }
        if let Some(output) = &self.output {
            settings.analysis.chart_path = output.clone();
            overridden.push("--output");
        }
        if let Some(reduction) = self.reduction {
            settings.analysis.reduction_factor = reduction;
            overridden.push("--reduction");
        }
        if self.config.is_some() {
            settings.overridden_flags = overridden;
        }

        Ok(settings)
    }
}

/// Checks the raw flags only; the merged `RunSettings::analysis` is
/// validated separately so the TOML file is read once.
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("base_dir", &self.base_dir)?;
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}
