//! Balance metric: population variance of team totals plus a fixed penalty
//! per leaderless team. Lower is better.

use crate::model::condition::Metric;
use crate::model::entity::Points;
use crate::model::group::Table;

pub fn mean(values: &[Points]) -> Metric {
    if values.is_empty() {
        return 0.0;
    }
    let sum: Metric = values.iter().map(|v| *v as Metric).sum();
    sum / values.len() as Metric
}

/// Population variance (divides by `n`).
pub fn variance(values: &[Points]) -> Metric {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    let accum: Metric = values
        .iter()
        .map(|v| {
            let diff = *v as Metric - mean;
            diff * diff
        })
        .sum();
    accum / values.len() as Metric
}

/// Metric for an explicit vector of totals and a count of leaderless teams.
///
/// Both the real and the hypothetical (swap) evaluations go through here so
/// that a recomputation after applying a swap reproduces the same value.
pub fn balance_metric(totals: &[Points], missing_leaders: usize, penalty: Metric) -> Metric {
    variance(totals) + penalty * missing_leaders as Metric
}

pub fn metric_of(table: &Table, penalty: Metric) -> Metric {
    balance_metric(&table.totals(), table.missing_leaders(), penalty)
}
