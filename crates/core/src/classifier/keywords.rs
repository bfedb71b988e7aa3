//! Keyword tables driving classification and estimation.
//!
//! Table order is significant: lookups take the first matching keyword,
//! so more specific entries must stay ahead of more general ones.

/// Words that vote for the exercise branch. "ran" is carried alongside
/// "run" because substring matching cannot reach the past tense.
pub const EXERCISE_KEYWORDS: &[&str] = &[
    "run", "ran", "jog", "walk", "gym", "workout", "exercise", "bike", "swim", "yoga", "cardio",
    "strength",
];

/// Words that vote for the food branch.
pub const FOOD_KEYWORDS: &[&str] = &[
    "eat", "ate", "breakfast", "lunch", "dinner", "snack", "meal", "food", "drank", "drink",
];

/// Keyword → display name for exercise sessions (first match wins).
pub const EXERCISE_NAMES: &[(&str, &str)] = &[
    ("run", "Running"),
    ("ran", "Running"),
    ("jog", "Jogging"),
    ("walk", "Walking"),
    ("gym", "Gym Workout"),
    ("workout", "Workout"),
    ("bike", "Cycling"),
    ("swim", "Swimming"),
    ("yoga", "Yoga"),
    ("cardio", "Cardio"),
    ("strength", "Strength Training"),
];

/// Keyword → default duration in minutes, used when the text carries no
/// explicit duration phrase (first match wins).
pub const DEFAULT_DURATIONS: &[(&str, u32)] = &[
    ("run", 30),
    ("ran", 30),
    ("jog", 30),
    ("walk", 45),
    ("gym", 60),
    ("workout", 60),
    ("yoga", 60),
];

/// Fallback duration when no keyword gives a better default.
pub const FALLBACK_DURATION_MINUTES: u32 = 30;

/// Keyword → estimated calories burned per minute (first match wins).
pub const CALORIES_PER_MINUTE: &[(&str, u32)] = &[
    ("run", 12),
    ("ran", 12),
    ("jog", 12),
    ("walk", 5),
    ("gym", 10),
    ("workout", 10),
    ("bike", 9),
    ("swim", 11),
    ("yoga", 4),
];

/// Per-minute burn rate for unrecognized activities.
pub const FALLBACK_CALORIES_PER_MINUTE: u32 = 8;

/// Keyword → display name for common foods (first match wins).
pub const FOOD_NAMES: &[(&str, &str)] = &[
    ("oatmeal", "Oatmeal"),
    ("chicken", "Chicken"),
    ("salad", "Salad"),
    ("pizza", "Pizza"),
    ("pasta", "Pasta"),
    ("rice", "Rice"),
    ("bread", "Bread"),
    ("apple", "Apple"),
    ("banana", "Banana"),
    ("coffee", "Coffee"),
    ("tea", "Tea"),
    ("water", "Water"),
    ("smoothie", "Smoothie"),
    ("sandwich", "Sandwich"),
    ("burger", "Burger"),
    ("eggs", "Eggs"),
    ("milk", "Milk"),
    ("yogurt", "Yogurt"),
    ("cheese", "Cheese"),
    ("nuts", "Nuts"),
];

/// Lower-cased food name → base calories per serving.
pub const BASE_CALORIES: &[(&str, u32)] = &[
    ("oatmeal", 150),
    ("chicken", 200),
    ("salad", 100),
    ("pizza", 300),
    ("pasta", 200),
    ("rice", 150),
    ("bread", 80),
    ("apple", 80),
    ("banana", 100),
    ("coffee", 5),
    ("tea", 2),
    ("water", 0),
    ("smoothie", 200),
    ("sandwich", 300),
    ("burger", 500),
    ("eggs", 150),
    ("milk", 150),
    ("yogurt", 100),
    ("cheese", 100),
    ("nuts", 200),
];

/// Base calories for foods absent from the table.
pub const FALLBACK_BASE_CALORIES: u32 = 200;
