use serde::{Deserialize, Serialize};

/// Daily intake targets: total calories plus grams per macro.
///
/// One active set per day — each `DailyData` carries its own snapshot,
/// so editing the defaults never rewrites history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyGoals {
    /// Target calorie intake (kcal)
    pub calories: u32,

    /// Target carbohydrates (grams)
    pub carbs: u32,

    /// Target protein (grams)
    pub protein: u32,

    /// Target fat (grams)
    pub fat: u32,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self {
            calories: 2000,
            carbs: 250,
            protein: 150,
            fat: 65,
        }
    }
}
