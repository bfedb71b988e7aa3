use chrono::{Datelike, Duration, NaiveDate};

use crate::models::day::{DailyData, DailyTotals};
use crate::models::journal::Journal;
use crate::models::summary::{WeekBreakdown, WindowDay, WindowSummary};

/// Computes derived totals for single days and rolls windows of days
/// into weekly/monthly summaries.
///
/// Pure business logic — no I/O, no hidden state. Results are computed
/// fresh from snapshots on every call, never cached or mutated in place.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the derived totals for one day.
    ///
    /// Holds for any well-formed day, including one with empty entry
    /// lists (all sums zero, `remaining_calories == goals.calories`):
    /// `net_calories == food_calories - exercise_calories` and
    /// `remaining_calories == goals.calories - net_calories`.
    #[must_use]
    pub fn daily_totals(&self, day: &DailyData) -> DailyTotals {
        let food_calories: u64 = day.food_entries.iter().map(|e| u64::from(e.calories)).sum();
        let exercise_calories: u64 = day
            .exercise_entries
            .iter()
            .map(|e| u64::from(e.calories_burned))
            .sum();
        let total_carbs: u64 = day.food_entries.iter().map(|e| u64::from(e.carbs)).sum();
        let total_protein: u64 = day.food_entries.iter().map(|e| u64::from(e.protein)).sum();
        let total_fat: u64 = day.food_entries.iter().map(|e| u64::from(e.fat)).sum();

        let net_calories = food_calories as i64 - exercise_calories as i64;
        let remaining_calories = i64::from(day.goals.calories) - net_calories;

        DailyTotals {
            food_calories: clamp_u32(food_calories),
            exercise_calories: clamp_u32(exercise_calories),
            net_calories,
            remaining_calories,
            total_carbs: clamp_u32(total_carbs),
            total_protein: clamp_u32(total_protein),
            total_fat: clamp_u32(total_fat),
            carbs_progress: Self::progress(clamp_u32(total_carbs), day.goals.carbs),
            protein_progress: Self::progress(clamp_u32(total_protein), day.goals.protein),
            fat_progress: Self::progress(clamp_u32(total_fat), day.goals.fat),
        }
    }

    /// Guarded percentage: `100 × actual / goal`, or `None` when the goal
    /// is zero. "No goal set" is deliberately distinct from 0%.
    #[must_use]
    pub fn progress(actual: u32, goal: u32) -> Option<f64> {
        if goal == 0 {
            None
        } else {
            Some(f64::from(actual) / f64::from(goal) * 100.0)
        }
    }

    /// Every calendar date from `start` to `end` inclusive, ascending.
    /// Empty when `end < start`.
    #[must_use]
    pub fn date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut current = start;
        while current <= end {
            dates.push(current);
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }
        dates
    }

    /// First and last date of the Monday-started week containing `anchor`.
    #[must_use]
    pub fn week_bounds(&self, anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
        let offset = i64::from(anchor.weekday().num_days_from_monday());
        let start = anchor - Duration::days(offset);
        (start, start + Duration::days(6))
    }

    /// First and last date of a calendar month, or `None` for an invalid
    /// year/month pair.
    #[must_use]
    pub fn month_bounds(&self, year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_month_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some((first, next_month_first.pred_opt()?))
    }

    /// Build a dense, gap-aware window: one slot per date, with totals for
    /// dates that have a daily record and `None` for the rest.
    #[must_use]
    pub fn build_window(&self, journal: &Journal, dates: &[NaiveDate]) -> Vec<WindowDay> {
        dates
            .iter()
            .map(|&date| WindowDay {
                date,
                totals: journal.day(date).map(|day| self.daily_totals(day)),
            })
            .collect()
    }

    /// Summarize the tracked days of a window. `None` when nothing in the
    /// window was tracked — callers must treat that as "no data", not zeros.
    ///
    /// Averages divide by the number of tracked days, not the window length.
    #[must_use]
    pub fn summarize_window(&self, window: &[WindowDay]) -> Option<WindowSummary> {
        let tracked: Vec<&DailyTotals> = window.iter().filter_map(|d| d.totals.as_ref()).collect();
        if tracked.is_empty() {
            return None;
        }

        let days_tracked = tracked.len();
        let total_calories: i64 = tracked.iter().map(|t| t.net_calories).sum();
        let total_carbs: u64 = tracked.iter().map(|t| u64::from(t.total_carbs)).sum();
        let total_protein: u64 = tracked.iter().map(|t| u64::from(t.total_protein)).sum();
        let total_fat: u64 = tracked.iter().map(|t| u64::from(t.total_fat)).sum();
        let total_exercise: u64 = tracked.iter().map(|t| u64::from(t.exercise_calories)).sum();

        let divisor = days_tracked as f64;

        Some(WindowSummary {
            total_calories,
            total_carbs,
            total_protein,
            total_fat,
            total_exercise,
            avg_calories: total_calories as f64 / divisor,
            avg_carbs: total_carbs as f64 / divisor,
            avg_protein: total_protein as f64 / divisor,
            avg_fat: total_fat as f64 / divisor,
            days_tracked,
            window_len: window.len(),
            tracking_ratio: days_tracked as f64 / window.len() as f64 * 100.0,
        })
    }

    /// Partition a month-length window into consecutive 7-day chunks (the
    /// last may be shorter) and summarize each chunk that has tracked days,
    /// tagged with a 1-based week index.
    #[must_use]
    pub fn weekly_breakdown(&self, window: &[WindowDay]) -> Vec<WeekBreakdown> {
        window
            .chunks(7)
            .enumerate()
            .filter_map(|(i, chunk)| {
                let tracked: Vec<&DailyTotals> =
                    chunk.iter().filter_map(|d| d.totals.as_ref()).collect();
                if tracked.is_empty() {
                    return None;
                }

                let total_calories: i64 = tracked.iter().map(|t| t.net_calories).sum();
                let total_exercise: u64 =
                    tracked.iter().map(|t| u64::from(t.exercise_calories)).sum();

                Some(WeekBreakdown {
                    week_number: i + 1,
                    days_tracked: tracked.len(),
                    total_calories,
                    total_exercise,
                    avg_calories: total_calories as f64 / tracked.len() as f64,
                })
            })
            .collect()
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
