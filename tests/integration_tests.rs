use commute_sim::core::report;
use commute_sim::{AnalysisConfig, AnalysisEngine, CommuteError, CommutePipeline, LocalStorage};
use std::path::Path;
use tempfile::TempDir;

const HEADER: &str = "origin,destination,current_commute_time_min,commuters_per_day\n";

fn write_input(dir: &Path, rows: &str) {
    let data_dir = dir.join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(
        data_dir.join("sample_transit_data.csv"),
        format!("{}{}", HEADER, rows),
    )
    .unwrap();
}

fn pipeline(dir: &Path) -> CommutePipeline<LocalStorage, AnalysisConfig> {
    CommutePipeline::new(LocalStorage::new(dir), AnalysisConfig::default())
}

fn run_capturing(dir: &Path) -> (String, Vec<u8>) {
    use commute_sim::core::Pipeline;

    let pipeline = pipeline(dir);
    let table = pipeline.extract().unwrap();
    let result = pipeline.transform(table).unwrap();

    let mut out = Vec::new();
    let chart_path = pipeline.load_into(result, &mut out).unwrap();
    let png = std::fs::read(dir.join(chart_path)).unwrap();

    (String::from_utf8(out).unwrap(), png)
}

#[test]
fn test_end_to_end_writes_report_and_chart() {
    let temp_dir = TempDir::new().unwrap();
    write_input(temp_dir.path(), "A,B,30,100\nC,D,10,50\n");

    let (stdout, png) = run_capturing(temp_dir.path());

    assert_eq!(
        stdout,
        "Current average commute time: 23.33 minutes\n\
         Projected average commute time (30% reduction): 16.33 minutes\n\
         Average time saved per commuter: 7.00 minutes\n"
    );
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
    assert!(temp_dir
        .path()
        .join("results/commute_time_comparison.png")
        .is_file());
}

#[test]
fn test_engine_run_returns_scenario_and_chart_path() {
    let temp_dir = TempDir::new().unwrap();
    write_input(temp_dir.path(), "A,B,20,1\n");

    let mut engine = AnalysisEngine::new(pipeline(temp_dir.path()));
    let (scenario, chart_path) = engine.run().unwrap();

    assert_eq!(chart_path, "results/commute_time_comparison.png");
    assert!((scenario.avg_commute_time - 20.0).abs() < 1e-9);
    assert!((scenario.avg_commute_time_new - 14.0).abs() < 1e-9);
    assert!((scenario.reduction - 6.0).abs() < 1e-9);
    assert_eq!(
        report::format_report(&scenario)[2],
        "Average time saved per commuter: 6.00 minutes"
    );
}

#[test]
fn test_rerun_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    write_input(
        temp_dir.path(),
        "Riverside,Downtown,42,1800\nNorthgate,Downtown,35,2400\nLakeview,Airport,47,410\n",
    );

    let (first_stdout, first_png) = run_capturing(temp_dir.path());
    let (second_stdout, second_png) = run_capturing(temp_dir.path());

    assert_eq!(first_stdout, second_stdout);
    assert_eq!(first_png, second_png);
}

#[test]
fn test_missing_input_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();

    let mut engine = AnalysisEngine::new(pipeline(temp_dir.path()));
    let err = engine.run().unwrap_err();

    match &err {
        CommuteError::DataNotFound { path } => {
            assert_eq!(path, "data/sample_transit_data.csv")
        }
        other => panic!("expected DataNotFound, got {:?}", other),
    }
    assert!(err.to_string().contains("data/sample_transit_data.csv"));
    assert!(!temp_dir.path().join("results").exists());
}

#[test]
fn test_zero_commuters_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    write_input(temp_dir.path(), "A,B,30,0\nC,D,10,0\n");

    let mut engine = AnalysisEngine::new(pipeline(temp_dir.path()));

    assert!(matches!(engine.run(), Err(CommuteError::NoCommuters)));
    assert!(!temp_dir.path().join("results").exists());
}

#[test]
fn test_missing_column_fails_at_load() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(
        data_dir.join("sample_transit_data.csv"),
        "origin,destination,commuters_per_day\nA,B,100\n",
    )
    .unwrap();

    let mut engine = AnalysisEngine::new(pipeline(temp_dir.path()));

    match engine.run() {
        Err(CommuteError::MissingColumn { column }) => {
            assert_eq!(column, "current_commute_time_min")
        }
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_existing_chart_is_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    write_input(temp_dir.path(), "A,B,30,100\n");
    let chart = temp_dir.path().join("results/commute_time_comparison.png");
    std::fs::create_dir_all(chart.parent().unwrap()).unwrap();
    std::fs::write(&chart, b"stale").unwrap();

    let (_, png) = run_capturing(temp_dir.path());

    assert_ne!(png, b"stale");
    assert_eq!(std::fs::read(&chart).unwrap(), png);
}

#[test]
fn test_custom_config_paths_and_factor() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("inputs/commutes.csv");
    std::fs::create_dir_all(input.parent().unwrap()).unwrap();
    std::fs::write(&input, format!("{}A,B,40,10\n", HEADER)).unwrap();

    let config = AnalysisConfig {
        input_path: "inputs/commutes.csv".to_string(),
        chart_path: "charts/half.png".to_string(),
        reduction_factor: 0.5,
        ..AnalysisConfig::default()
    };
    let mut engine =
        AnalysisEngine::new(CommutePipeline::new(LocalStorage::new(temp_dir.path()), config));

    let (scenario, chart_path) = engine.run().unwrap();

    assert_eq!(chart_path, "charts/half.png");
    assert!((scenario.avg_commute_time_new - 20.0).abs() < 1e-9);
    assert_eq!(
        report::format_report(&scenario)[1],
        "Projected average commute time (50% reduction): 20.00 minutes"
    );
    assert!(temp_dir.path().join("charts/half.png").is_file());
}
