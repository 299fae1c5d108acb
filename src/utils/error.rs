use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommuteError {
    #[error("Sample data not found at {path}. Please create the CSV file with columns origin, destination, current_commute_time_min and commuters_per_day.")]
    DataNotFound { path: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Invalid record on line {line}: {field} {reason}")]
    InvalidRecord {
        line: u64,
        field: String,
        reason: String,
    },

    #[error("Total commuters per day is zero, average commute time is undefined")]
    NoCommuters,

    #[error("{quantity} is not a finite number, the input values are too large to average")]
    Overflow { quantity: String },

    #[error("Chart rendering failed: {message}")]
    ChartError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl CommuteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CommuteError::DataNotFound { .. } | CommuteError::CsvError(_) => ErrorCategory::Input,
            CommuteError::MissingColumn { .. }
            | CommuteError::InvalidRecord { .. }
            | CommuteError::NoCommuters
            | CommuteError::Overflow { .. } => ErrorCategory::Data,
            CommuteError::IoError(_) | CommuteError::ChartError { .. } => ErrorCategory::Output,
            CommuteError::ConfigError { .. }
            | CommuteError::ConfigValidationError { .. }
            | CommuteError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Data | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CommuteError::DataNotFound { path } => {
                format!("Create {} or point --input at an existing CSV file", path)
            }
            CommuteError::MissingColumn { column } => {
                format!("Add a '{}' column to the CSV header row", column)
            }
            CommuteError::InvalidRecord { line, .. } => {
                format!("Fix the values on line {} of the input file", line)
            }
            CommuteError::NoCommuters => {
                "Make sure at least one row has a positive commuters_per_day".to_string()
            }
            CommuteError::Overflow { .. } => {
                "Check commuters_per_day and current_commute_time_min for implausibly large values"
                    .to_string()
            }
            CommuteError::CsvError(_) => "Check that the input is well-formed CSV".to_string(),
            CommuteError::IoError(_) => {
                "Check file permissions and available disk space".to_string()
            }
            CommuteError::ChartError { .. } => {
                "Check the chart size settings and the output directory".to_string()
            }
            CommuteError::ConfigError { .. }
            | CommuteError::ConfigValidationError { .. }
            | CommuteError::InvalidConfigValueError { .. } => {
                "Review the command line flags or the TOML configuration file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CommuteError::DataNotFound { .. } => self.to_string(),
            CommuteError::NoCommuters => {
                "No commuters in the input data, nothing to average".to_string()
            }
            other => format!("{} error: {}", other.category_label(), other),
        }
    }

    fn category_label(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Input",
            ErrorCategory::Data => "Data",
            ErrorCategory::Output => "Output",
            ErrorCategory::Configuration => "Configuration",
        }
    }
}

pub type Result<T> = std::result::Result<T, CommuteError>;
