//! Deterministic entry classifier and nutrition estimator.
//!
//! Maps one free-text utterance to a structured food or exercise entry
//! with best-effort estimates. Pure and total: the same input always
//! yields the same output, and no input — including the empty string —
//! produces an error. This is the offline substitute for a hosted
//! text-completion service.
//!
//! Matching is substring containment over the lower-cased input, not
//! word-boundary matching, so a keyword embedded in a longer token still
//! counts ("sidewalk" matches "walk"). That quirk is part of the contract.

pub mod keywords;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use keywords::{
    BASE_CALORIES, CALORIES_PER_MINUTE, DEFAULT_DURATIONS, EXERCISE_KEYWORDS, EXERCISE_NAMES,
    FALLBACK_BASE_CALORIES, FALLBACK_CALORIES_PER_MINUTE, FALLBACK_DURATION_MINUTES,
    FOOD_KEYWORDS, FOOD_NAMES,
};

/// Share of calories assumed to come from carbohydrates / protein / fat.
const CARB_CALORIE_SHARE: f64 = 0.5;
const PROTEIN_CALORIE_SHARE: f64 = 0.2;
const FAT_CALORIE_SHARE: f64 = 0.3;

/// Energy density per gram (kcal).
const CALORIES_PER_GRAM_CARB: f64 = 4.0;
const CALORIES_PER_GRAM_PROTEIN: f64 = 4.0;
const CALORIES_PER_GRAM_FAT: f64 = 9.0;

static DURATION_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(min|minutes?|hour|hours?)").ok());

static QUANTITY_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(\d+(?:\.\d+)?)\s*(cup|cups|bowl|bowls|slice|slices|piece|pieces|gram|grams|kg|lb|pound|pounds|ml|liter|oz|ounce|ounces)",
    )
    .ok()
});

static NUMBER_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").ok());

/// Structured output of the classifier: one typed entry, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParsedEntry {
    Food {
        name: String,
        /// Serving description, e.g. "1 bowl" or "2 slices"
        quantity: String,
        calories: u32,
        carbs: u32,
        protein: u32,
        fat: u32,
    },
    Exercise {
        name: String,
        /// Duration in minutes
        duration: u32,
        calories_burned: u32,
    },
}

impl ParsedEntry {
    /// Display name of the parsed entry, whichever variant it is.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            ParsedEntry::Food { name, .. } | ParsedEntry::Exercise { name, .. } => name,
        }
    }
}

/// Which keyword set claimed the input.
///
/// `Unclassified` is a first-class outcome, not an error: input matching
/// neither keyword set deliberately falls through to the food parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Exercise,
    Food,
    Unclassified,
}

/// Score the two keyword sets against the input.
///
/// Exercise wins only when an exercise keyword matched and no food
/// keyword did; a food match (or a tie) classifies as food.
#[must_use]
pub fn classify(input: &str) -> Classification {
    let lowered = input.to_lowercase();
    let is_exercise = EXERCISE_KEYWORDS.iter().any(|kw| lowered.contains(kw));
    let is_food = FOOD_KEYWORDS.iter().any(|kw| lowered.contains(kw));

    if is_exercise && !is_food {
        Classification::Exercise
    } else if is_food {
        Classification::Food
    } else {
        Classification::Unclassified
    }
}

/// Parse one free-text utterance into a structured entry.
#[must_use]
pub fn parse_entry(input: &str) -> ParsedEntry {
    let lowered = input.to_lowercase();
    match classify(input) {
        Classification::Exercise => parse_exercise(&lowered),
        Classification::Food | Classification::Unclassified => parse_food(&lowered),
    }
}

fn parse_exercise(lowered: &str) -> ParsedEntry {
    let duration = extract_duration(lowered);
    let per_minute = first_value(CALORIES_PER_MINUTE, lowered, FALLBACK_CALORIES_PER_MINUTE);

    ParsedEntry::Exercise {
        name: first_label(EXERCISE_NAMES, lowered, "Exercise"),
        duration,
        calories_burned: duration.saturating_mul(per_minute),
    }
}

fn parse_food(lowered: &str) -> ParsedEntry {
    let name = extract_food_name(lowered);
    let quantity = extract_quantity(lowered);
    let calories = estimate_calories(&name, &quantity);

    ParsedEntry::Food {
        carbs: macro_grams(calories, CARB_CALORIE_SHARE, CALORIES_PER_GRAM_CARB),
        protein: macro_grams(calories, PROTEIN_CALORIE_SHARE, CALORIES_PER_GRAM_PROTEIN),
        fat: macro_grams(calories, FAT_CALORIE_SHARE, CALORIES_PER_GRAM_FAT),
        name,
        quantity,
        calories,
    }
}

/// Duration in minutes: an explicit `<n> min`/`<n> hour` phrase if present
/// (hours convert ×60), otherwise an activity-specific default.
fn extract_duration(lowered: &str) -> u32 {
    if let Some(caps) = DURATION_PATTERN
        .as_ref()
        .and_then(|re| re.captures(lowered))
    {
        if let Ok(value) = caps[1].parse::<u32>() {
            let unit = &caps[2];
            return if unit.starts_with("hour") {
                value.saturating_mul(60)
            } else {
                value
            };
        }
    }

    first_value(DEFAULT_DURATIONS, lowered, FALLBACK_DURATION_MINUTES)
}

/// Food display name: first table match, else the first word longer than
/// two characters with its first letter upper-cased, else "Food Item".
fn extract_food_name(lowered: &str) -> String {
    if let Some((_, label)) = FOOD_NAMES.iter().find(|(kw, _)| lowered.contains(kw)) {
        return (*label).to_string();
    }

    lowered
        .split_whitespace()
        .find(|word| word.len() > 2)
        .map(capitalize)
        .unwrap_or_else(|| "Food Item".to_string())
}

/// Serving description: `<number> <unit>` when a unit phrase is present,
/// else the first bare number, else "1 serving".
fn extract_quantity(lowered: &str) -> String {
    if let Some(caps) = QUANTITY_PATTERN
        .as_ref()
        .and_then(|re| re.captures(lowered))
    {
        return format!("{} {}", &caps[1], &caps[2]);
    }

    if let Some(m) = NUMBER_PATTERN.as_ref().and_then(|re| re.find(lowered)) {
        return m.as_str().to_string();
    }

    "1 serving".to_string()
}

/// Base calories per serving for the derived name, scaled by the leading
/// number in the quantity string.
fn estimate_calories(name: &str, quantity: &str) -> u32 {
    let key = name.to_lowercase();
    let base = BASE_CALORIES
        .iter()
        .find(|(food, _)| *food == key)
        .map_or(FALLBACK_BASE_CALORIES, |(_, cal)| *cal);

    let multiplier = NUMBER_PATTERN
        .as_ref()
        .and_then(|re| re.find(quantity))
        .and_then(|m| m.as_str().parse::<f64>().ok());

    match multiplier {
        Some(m) => (f64::from(base) * m).round() as u32,
        None => base,
    }
}

fn macro_grams(calories: u32, share: f64, per_gram: f64) -> u32 {
    (f64::from(calories) * share / per_gram).round() as u32
}

fn first_label(table: &[(&str, &str)], lowered: &str, fallback: &str) -> String {
    table
        .iter()
        .find(|(kw, _)| lowered.contains(kw))
        .map_or_else(|| fallback.to_string(), |(_, label)| (*label).to_string())
}

fn first_value(table: &[(&str, u32)], lowered: &str, fallback: u32) -> u32 {
    table
        .iter()
        .find(|(kw, _)| lowered.contains(kw))
        .map_or(fallback, |(_, value)| *value)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
