use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single weigh-in.
///
/// Weight entries live in one global, date-ordered collection rather than
/// inside `DailyData`. At most one canonical entry per calendar date —
/// a later write for the same date replaces the earlier one (keyed by
/// date equality, not by id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Unique identifier
    pub id: Uuid,

    /// Body weight (kg, always positive)
    pub weight: f64,

    /// Date of the weigh-in (daily granularity)
    pub date: NaiveDate,
}

impl WeightEntry {
    pub fn new(weight: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            weight,
            date,
        }
    }
}
