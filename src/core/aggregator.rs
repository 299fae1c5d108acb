use crate::domain::model::{CommuteTable, ScenarioResult, TimeColumn};
use crate::utils::error::{CommuteError, Result};

/// Share of commute time the pod-transit scenario removes.
pub const DEFAULT_REDUCTION_FACTOR: f64 = 0.3;

/// Writes `current × (1 − factor)` into every record's projected column.
pub fn apply_reduction(table: &mut CommuteTable, factor: f64) {
    let scale = 1.0 - factor;
    for record in table.records_mut() {
        record.projected_commute_time_min = Some(record.current_commute_time_min * scale);
    }
}

fn ensure_finite(quantity: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CommuteError::Overflow {
            quantity: quantity.to_string(),
        })
    }
}

pub fn summarize(table: &mut CommuteTable, factor: f64) -> Result<ScenarioResult> {
    let total_commuters = ensure_finite("total_commuters", table.total_commuters())?;
    if total_commuters == 0.0 {
        tracing::warn!(
            "{} records but zero commuters per day, refusing to average",
            table.len()
        );
        return Err(CommuteError::NoCommuters);
    }

    let total_commute_time =
        ensure_finite("total_commute_time", table.weighted_total(TimeColumn::Current))?;
    let avg_commute_time = ensure_finite("avg_commute_time", total_commute_time / total_commuters)?;
    tracing::debug!(
        total_commute_time,
        total_commuters,
        avg_commute_time,
        "Computed current weighted average"
    );

    apply_reduction(table, factor);
    let total_new_time = ensure_finite("total_new_time", table.weighted_total(TimeColumn::Projected))?;
    let avg_commute_time_new =
        ensure_finite("avg_commute_time_new", total_new_time / total_commuters)?;
    tracing::debug!(
        total_new_time,
        avg_commute_time_new,
        factor,
        "Computed projected weighted average"
    );

    Ok(ScenarioResult {
        avg_commute_time,
        avg_commute_time_new,
        reduction: avg_commute_time - avg_commute_time_new,
        reduction_factor: factor,
        total_commuters,
        record_count: table.len(),
    })
}
