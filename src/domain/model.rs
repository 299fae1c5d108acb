use serde::{Deserialize, Serialize};

/// One origin/destination pair with its current travel time and daily volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommuteRecord {
    pub origin: String,
    pub destination: String,
    pub current_commute_time_min: f64,
    pub commuters_per_day: f64,
    /// Filled in by the aggregator, never read from input.
    #[serde(skip_deserializing, default)]
    pub projected_commute_time_min: Option<f64>,
}

impl CommuteRecord {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        current_commute_time_min: f64,
        commuters_per_day: f64,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            current_commute_time_min,
            commuters_per_day,
            projected_commute_time_min: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeColumn {
    Current,
    Projected,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommuteTable {
    records: Vec<CommuteRecord>,
}

impl CommuteTable {
    pub fn new(records: Vec<CommuteRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CommuteRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [CommuteRecord] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_commuters(&self) -> f64 {
        self.records.iter().map(|r| r.commuters_per_day).sum()
    }

    /// Σ(time × commuters) over the chosen column. Records without a
    /// projected time contribute nothing to the projected total.
    pub fn weighted_total(&self, column: TimeColumn) -> f64 {
        self.records
            .iter()
            .filter_map(|r| {
                let time = match column {
                    TimeColumn::Current => Some(r.current_commute_time_min),
                    TimeColumn::Projected => r.projected_commute_time_min,
                };
                time.map(|t| t * r.commuters_per_day)
            })
            .sum()
    }
}

impl FromIterator<CommuteRecord> for CommuteTable {
    fn from_iter<I: IntoIterator<Item = CommuteRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub avg_commute_time: f64,
    pub avg_commute_time_new: f64,
    pub reduction: f64,
    pub reduction_factor: f64,
    pub total_commuters: f64,
    pub record_count: usize,
}

#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub table: CommuteTable,
    pub scenario: ScenarioResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_total_by_column() {
        let mut table: CommuteTable = vec![
            CommuteRecord::new("A", "B", 30.0, 100.0),
            CommuteRecord::new("C", "D", 10.0, 50.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 2);
        assert_eq!(table.total_commuters(), 150.0);
        assert_eq!(table.weighted_total(TimeColumn::Current), 3500.0);
        assert_eq!(table.weighted_total(TimeColumn::Projected), 0.0);

        table.records_mut()[0].projected_commute_time_min = Some(21.0);
        assert_eq!(table.weighted_total(TimeColumn::Projected), 2100.0);
    }

    #[test]
    fn test_empty_table() {
        let table = CommuteTable::default();
        assert!(table.is_empty());
        assert_eq!(table.total_commuters(), 0.0);
    }
}
