use crate::domain::model::{CommuteRecord, CommuteTable};
use crate::domain::ports::Storage;
use crate::utils::error::{CommuteError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};

pub const REQUIRED_COLUMNS: [&str; 4] = [
    "origin",
    "destination",
    "current_commute_time_min",
    "commuters_per_day",
];

/// Reads the commuting table at `path`, failing with `DataNotFound` before
/// touching anything else when the file is absent.
pub fn load_table<S: Storage>(storage: &S, path: &str) -> Result<CommuteTable> {
    if !storage.exists(path) {
        return Err(CommuteError::DataNotFound {
            path: path.to_string(),
        });
    }

    let data = storage.read_file(path)?;
    tracing::debug!("Read {} bytes from {}", data.len(), path);
    parse_table(&data)
}

pub fn parse_table(data: &[u8]) -> Result<CommuteTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    check_columns(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let record: CommuteRecord = row.deserialize(Some(&headers))?;
        check_record(&record, line)?;
        records.push(record);
    }

    tracing::debug!("Parsed {} commute records", records.len());
    Ok(CommuteTable::new(records))
}

fn check_columns(headers: &StringRecord) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(CommuteError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

fn check_record(record: &CommuteRecord, line: u64) -> Result<()> {
    let fields = [
        ("current_commute_time_min", record.current_commute_time_min),
        ("commuters_per_day", record.commuters_per_day),
    ];

    for (field, value) in fields {
        if !value.is_finite() {
            return Err(CommuteError::InvalidRecord {
                line,
                field: field.to_string(),
                reason: format!("must be a finite number, got {}", value),
            });
        }
        if value < 0.0 {
            return Err(CommuteError::InvalidRecord {
                line,
                field: field.to_string(),
                reason: format!("must not be negative, got {}", value),
            });
        }
    }
    Ok(())
}
