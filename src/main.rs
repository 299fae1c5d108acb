use clap::Parser;
use commute_sim::utils::error::{CommuteError, ErrorSeverity};
use commute_sim::utils::{logger, validation::Validate};
use commute_sim::{AnalysisEngine, CliConfig, CommutePipeline, LocalStorage};

fn exit_code(e: &CommuteError) -> i32 {
    match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: CommuteError) -> ! {
    tracing::error!(
        "❌ Commute analysis failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

fn main() {
    let config = CliConfig::parse();

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    if config.log_json {
        logger::init_json_logger(config.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(config.verbose, settings.log_level.as_deref());
    }

    tracing::info!("Starting commute-sim");
    tracing::debug!("Run settings: {:?}", settings);
    for flag in &settings.overridden_flags {
        tracing::warn!("{} overrides the value from the configuration file", flag);
    }

    if let Err(e) = config.validate().and_then(|_| settings.analysis.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(e);
    }

    if settings.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(settings.base_dir.clone());
    let pipeline = CommutePipeline::new(storage, settings.analysis);
    let mut engine = AnalysisEngine::new_with_monitoring(pipeline, settings.monitor);

    match engine.run() {
        Ok((_, chart_path)) => {
            tracing::info!("✅ Commute analysis completed, chart at {}", chart_path);
        }
        Err(e) => fail(e),
    }
}
