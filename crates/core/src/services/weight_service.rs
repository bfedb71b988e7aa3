use chrono::Duration;

use crate::models::summary::{WeeklyWeightChange, WeightProgress};
use crate::models::weight::WeightEntry;

/// Weight-trend calculations over the chronologically sorted weigh-in
/// history. All results are `Option` — "not enough data" and "no defined
/// denominator" are ordinary outcomes, never errors.
pub struct WeightService;

impl WeightService {
    pub fn new() -> Self {
        Self
    }

    /// Latest weight minus earliest weight. `None` with fewer than two
    /// entries.
    #[must_use]
    pub fn overall_change(&self, entries: &[WeightEntry]) -> Option<f64> {
        if entries.len() < 2 {
            return None;
        }
        let first = entries.first()?;
        let last = entries.last()?;
        Some(last.weight - first.weight)
    }

    /// Progress toward a target weight, clamped to 0..=100.
    ///
    /// `None` with fewer than two entries, or when the target equals the
    /// starting weight (the denominator would be zero — there is no
    /// meaningful "fraction of the way there").
    #[must_use]
    pub fn target_progress(
        &self,
        entries: &[WeightEntry],
        target_weight: f64,
    ) -> Option<WeightProgress> {
        if entries.len() < 2 {
            return None;
        }
        let start = entries.first()?;
        let latest = entries.last()?;

        let total_change = target_weight - start.weight;
        if total_change == 0.0 {
            return None;
        }

        let current_change = latest.weight - start.weight;
        let progress_pct = (current_change / total_change * 100.0).clamp(0.0, 100.0);

        Some(WeightProgress {
            progress_pct,
            current_change,
            total_change,
            latest_weight: latest.weight,
            start_weight: start.weight,
            target_weight,
        })
    }

    /// Week-over-week movement: latest weight against the most recent
    /// entry dated at least 7 days before the latest one. `None` when no
    /// entry is old enough — that is "no weekly data", not an error.
    #[must_use]
    pub fn weekly_change(&self, entries: &[WeightEntry]) -> Option<WeeklyWeightChange> {
        let latest = entries.last()?;
        let cutoff = latest.date - Duration::days(7);

        let reference = entries.iter().rev().find(|e| e.date <= cutoff)?;

        Some(WeeklyWeightChange {
            change: latest.weight - reference.weight,
            percentage: (latest.weight - reference.weight) / reference.weight * 100.0,
        })
    }
}

impl Default for WeightService {
    fn default() -> Self {
        Self::new()
    }
}
