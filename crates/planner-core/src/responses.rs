//! Dashboard response types returned as JSON by `splan summary`.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TaskStatus;

/// Per-status counts for the summary dashboard.
///
/// `by_status` always holds an entry for every recognized status, so its
/// values sum to `total`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub by_status: BTreeMap<TaskStatus, usize>,
}

impl TaskSummary {
    /// Count the given statuses.
    #[must_use]
    pub fn from_statuses(statuses: impl IntoIterator<Item = TaskStatus>) -> Self {
        let mut by_status: BTreeMap<TaskStatus, usize> =
            TaskStatus::ALL.iter().map(|status| (*status, 0)).collect();
        let mut total = 0;
        for status in statuses {
            *by_status.entry(status).or_default() += 1;
            total += 1;
        }
        Self { total, by_status }
    }

    #[must_use]
    pub fn count(&self, status: TaskStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    /// One bar per status, widths relative to the largest count.
    #[must_use]
    pub fn bars(&self) -> Vec<StatusBar> {
        let counts: Vec<usize> = TaskStatus::ALL.iter().map(|s| self.count(*s)).collect();
        TaskStatus::ALL
            .iter()
            .zip(&counts)
            .map(|(status, count)| StatusBar {
                status: *status,
                count: *count,
                width: bar_width(*count, &counts),
            })
            .collect()
    }
}

/// A single dashboard row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StatusBar {
    pub status: TaskStatus,
    pub count: usize,
    /// Percentage of the widest bar, 0–100.
    pub width: f64,
}

/// Response from `splan summary`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SummaryResponse {
    pub summary: TaskSummary,
    pub bars: Vec<StatusBar>,
}

/// Width of a bar as a percentage of the largest comparison count.
///
/// The largest count is floored at 1, so all-zero input yields 0 rather than
/// dividing by zero. A `count` above every comparison count is clamped to 100.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bar_width(count: usize, counts: &[usize]) -> f64 {
    let max = counts.iter().copied().max().unwrap_or(0).max(1);
    (100.0 * count as f64 / max as f64).min(100.0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bar_width_all_zero_is_zero() {
        assert!(bar_width(0, &[0, 0, 0, 0]).abs() < f64::EPSILON);
    }

    #[test]
    fn bar_width_largest_is_full() {
        assert!((bar_width(3, &[3, 1, 0, 0]) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bar_width_is_proportional() {
        assert!((bar_width(1, &[4, 1, 0, 0]) - 25.0).abs() < f64::EPSILON);
        assert!((bar_width(1, &[1, 1, 1, 1]) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bar_width_clamps_outlier_and_handles_empty() {
        assert!((bar_width(5, &[2, 1]) - 100.0).abs() < f64::EPSILON);
        assert!((bar_width(1, &[]) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_lists_every_status() {
        let summary = TaskSummary::from_statuses([]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.by_status.len(), TaskStatus::ALL.len());
        assert!(summary.by_status.values().all(|count| *count == 0));
    }

    #[test]
    fn summary_serializes_snake_case_keys() {
        let summary = TaskSummary::from_statuses([TaskStatus::InProgress, TaskStatus::Open]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "total": 2,
                "by_status": {"open": 1, "in_progress": 1, "pending": 0, "completed": 0}
            })
        );
    }

    #[test]
    fn bars_follow_dashboard_order() {
        let summary = TaskSummary::from_statuses([
            TaskStatus::Completed,
            TaskStatus::Completed,
            TaskStatus::Open,
        ]);
        let bars = summary.bars();
        let statuses: Vec<TaskStatus> = bars.iter().map(|bar| bar.status).collect();
        assert_eq!(statuses, TaskStatus::ALL.to_vec());
        assert!((bars[0].width - 50.0).abs() < f64::EPSILON);
        assert!((bars[3].width - 100.0).abs() < f64::EPSILON);
        assert!(bars[1].width.abs() < f64::EPSILON);
    }
}
