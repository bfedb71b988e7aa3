use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged meal or snack.
///
/// Immutable once created (except by deletion). Owned by exactly one
/// `DailyData` record, addressed by that record's date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Unique within the owning day's food list
    pub id: Uuid,

    /// Display name (e.g., "Oatmeal")
    pub name: String,

    /// Estimated calories (kcal)
    pub calories: u32,

    /// Estimated carbohydrates (grams)
    pub carbs: u32,

    /// Estimated protein (grams)
    pub protein: u32,

    /// Estimated fat (grams)
    pub fat: u32,

    /// Free-text serving description (e.g., "1 bowl", "2 slices")
    pub quantity: String,

    /// When the entry was logged
    pub timestamp: DateTime<Utc>,
}

impl FoodEntry {
    pub fn new(
        name: impl Into<String>,
        calories: u32,
        carbs: u32,
        protein: u32,
        fat: u32,
        quantity: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            calories,
            carbs,
            protein,
            fat,
            quantity: quantity.into(),
            timestamp,
        }
    }
}

/// A single logged exercise session. Same ownership rules as `FoodEntry`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Unique within the owning day's exercise list
    pub id: Uuid,

    /// Display name (e.g., "Running")
    pub name: String,

    /// Estimated calories burned (kcal)
    pub calories_burned: u32,

    /// Duration in minutes
    pub duration: u32,

    /// When the entry was logged
    pub timestamp: DateTime<Utc>,
}

impl ExerciseEntry {
    pub fn new(
        name: impl Into<String>,
        calories_burned: u32,
        duration: u32,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            calories_burned,
            duration,
            timestamp,
        }
    }
}
