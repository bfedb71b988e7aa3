use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::{ExerciseEntry, FoodEntry};
use super::goals::DailyGoals;

/// Everything tracked for one calendar date: the goals snapshot and the
/// food/exercise entries, in append order.
///
/// Created lazily the first time a date is accessed, seeded with the
/// configured default goals. At most one record exists per date, and the
/// record's `date` always agrees with the key it is stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyData {
    /// Calendar date (canonical string form is `YYYY-MM-DD`)
    pub date: NaiveDate,

    /// Goals snapshot for this day
    pub goals: DailyGoals,

    /// Logged meals, in the order they were added
    #[serde(default)]
    pub food_entries: Vec<FoodEntry>,

    /// Logged exercise sessions, in the order they were added
    #[serde(default)]
    pub exercise_entries: Vec<ExerciseEntry>,
}

impl DailyData {
    pub fn new(date: NaiveDate, goals: DailyGoals) -> Self {
        Self {
            date,
            goals,
            food_entries: Vec::new(),
            exercise_entries: Vec::new(),
        }
    }

    /// Canonical `YYYY-MM-DD` key for this day.
    #[must_use]
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Derived totals for one day. Computed on demand, never stored.
///
/// Progress fields are `None` when the corresponding goal is zero —
/// "no goal set" is a distinct state from 0% progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    /// Sum of calories over food entries
    pub food_calories: u32,

    /// Sum of calories burned over exercise entries
    pub exercise_calories: u32,

    /// `food_calories - exercise_calories` (may be negative)
    pub net_calories: i64,

    /// `goals.calories - net_calories` (may be negative)
    pub remaining_calories: i64,

    /// Sum of carbohydrate grams over food entries
    pub total_carbs: u32,

    /// Sum of protein grams over food entries
    pub total_protein: u32,

    /// Sum of fat grams over food entries
    pub total_fat: u32,

    /// `100 × total_carbs / goals.carbs`, `None` when the goal is 0
    pub carbs_progress: Option<f64>,

    /// `100 × total_protein / goals.protein`, `None` when the goal is 0
    pub protein_progress: Option<f64>,

    /// `100 × total_fat / goals.fat`, `None` when the goal is 0
    pub fat_progress: Option<f64>,
}
