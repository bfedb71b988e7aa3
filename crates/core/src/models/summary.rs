use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::day::DailyTotals;

/// One slot in a fixed-length date window.
///
/// Windows are dense: every calendar date in the span gets a slot whether
/// or not anything was tracked that day, which keeps charts and
/// "days tracked" ratios gap-aware.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowDay {
    /// The calendar date this slot covers
    pub date: NaiveDate,

    /// Totals for the day, or `None` when nothing was tracked
    pub totals: Option<DailyTotals>,
}

impl WindowDay {
    /// Whether a daily record exists for this slot's date.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.totals.is_some()
    }
}

/// Aggregated stats over the tracked days of a window.
///
/// Averages are arithmetic means over tracked days only, not over the
/// full window length. Absent entirely (the caller gets `None`) when the
/// window has no tracked days — "no data" is distinct from all-zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSummary {
    /// Sum of net calories over tracked days
    pub total_calories: i64,

    /// Sum of carbohydrate grams over tracked days
    pub total_carbs: u64,

    /// Sum of protein grams over tracked days
    pub total_protein: u64,

    /// Sum of fat grams over tracked days
    pub total_fat: u64,

    /// Sum of exercise calories burned over tracked days
    pub total_exercise: u64,

    /// Mean net calories per tracked day
    pub avg_calories: f64,

    /// Mean carbohydrate grams per tracked day
    pub avg_carbs: f64,

    /// Mean protein grams per tracked day
    pub avg_protein: f64,

    /// Mean fat grams per tracked day
    pub avg_fat: f64,

    /// Number of days in the window with a daily record
    pub days_tracked: usize,

    /// Total number of days in the window
    pub window_len: usize,

    /// `100 × days_tracked / window_len`
    pub tracking_ratio: f64,
}

/// Summary of one 7-day chunk inside a month window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekBreakdown {
    /// 1-based index of the chunk within the month
    pub week_number: usize,

    /// Tracked days inside this chunk
    pub days_tracked: usize,

    /// Sum of net calories over the chunk's tracked days
    pub total_calories: i64,

    /// Sum of exercise calories over the chunk's tracked days
    pub total_exercise: u64,

    /// Mean net calories per tracked day in the chunk
    pub avg_calories: f64,
}

/// Whether an insight celebrates something or suggests a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightKind {
    Achievement,
    Recommendation,
}

/// A single derived insight over a window summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Achievement or recommendation
    pub kind: InsightKind,

    /// Human-readable message for display
    pub message: String,
}

/// Progress toward a target weight, derived from the weigh-in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightProgress {
    /// `100 × (latest - start) / (target - start)`, clamped to 0..=100
    pub progress_pct: f64,

    /// `latest - start`
    pub current_change: f64,

    /// `target - start`
    pub total_change: f64,

    /// Most recent recorded weight
    pub latest_weight: f64,

    /// First recorded weight
    pub start_weight: f64,

    /// The target weight
    pub target_weight: f64,
}

/// Week-over-week weight movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyWeightChange {
    /// Latest weight minus the reference weight from ≥ 7 days earlier
    pub change: f64,

    /// Change as a percentage of the reference weight
    pub percentage: f64,
}
