use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::classifier::ParsedEntry;
use crate::errors::CoreError;
use crate::models::day::DailyData;
use crate::models::entry::{ExerciseEntry, FoodEntry};
use crate::models::goals::DailyGoals;
use crate::models::journal::Journal;
use crate::models::weight::WeightEntry;

/// Manages journal mutations: lazy day creation, entry append/removal,
/// goal edits, and weigh-in upserts.
///
/// Pure business logic — no I/O. Every mutation validates before it
/// commits.
pub struct JournalService;

impl JournalService {
    pub fn new() -> Self {
        Self
    }

    /// Get the daily record for a date, creating it with the configured
    /// default goals on first access.
    pub fn ensure_day<'a>(&self, journal: &'a mut Journal, date: NaiveDate) -> &'a mut DailyData {
        let default_goals = journal.settings.default_goals;
        journal
            .days
            .entry(date)
            .or_insert_with(|| DailyData::new(date, default_goals))
    }

    /// Append a food entry to a day's record. Returns the new entry's id.
    pub fn add_food_entry(
        &self,
        journal: &mut Journal,
        date: NaiveDate,
        entry: FoodEntry,
    ) -> Result<Uuid, CoreError> {
        if entry.name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Food entry name must not be empty".into(),
            ));
        }
        let id = entry.id;
        self.ensure_day(journal, date).food_entries.push(entry);
        Ok(id)
    }

    /// Append an exercise entry to a day's record. Returns the new
    /// entry's id.
    pub fn add_exercise_entry(
        &self,
        journal: &mut Journal,
        date: NaiveDate,
        entry: ExerciseEntry,
    ) -> Result<Uuid, CoreError> {
        if entry.name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Exercise entry name must not be empty".into(),
            ));
        }
        let id = entry.id;
        self.ensure_day(journal, date).exercise_entries.push(entry);
        Ok(id)
    }

    /// Materialize a parsed entry into the day's record, stamping it with
    /// the given timestamp. Returns the new entry's id.
    pub fn apply_parsed(
        &self,
        journal: &mut Journal,
        date: NaiveDate,
        parsed: &ParsedEntry,
        timestamp: DateTime<Utc>,
    ) -> Result<Uuid, CoreError> {
        match parsed {
            ParsedEntry::Food {
                name,
                quantity,
                calories,
                carbs,
                protein,
                fat,
            } => self.add_food_entry(
                journal,
                date,
                FoodEntry::new(
                    name.clone(),
                    *calories,
                    *carbs,
                    *protein,
                    *fat,
                    quantity.clone(),
                    timestamp,
                ),
            ),
            ParsedEntry::Exercise {
                name,
                duration,
                calories_burned,
            } => self.add_exercise_entry(
                journal,
                date,
                ExerciseEntry::new(name.clone(), *calories_burned, *duration, timestamp),
            ),
        }
    }

    /// Remove a food entry by id from a day's record.
    pub fn remove_food_entry(
        &self,
        journal: &mut Journal,
        date: NaiveDate,
        entry_id: Uuid,
    ) -> Result<(), CoreError> {
        let day = journal
            .days
            .get_mut(&date)
            .ok_or_else(|| CoreError::DayNotFound(date.to_string()))?;
        let idx = day
            .food_entries
            .iter()
            .position(|e| e.id == entry_id)
            .ok_or_else(|| CoreError::EntryNotFound(entry_id.to_string()))?;
        day.food_entries.remove(idx);
        Ok(())
    }

    /// Remove an exercise entry by id from a day's record.
    pub fn remove_exercise_entry(
        &self,
        journal: &mut Journal,
        date: NaiveDate,
        entry_id: Uuid,
    ) -> Result<(), CoreError> {
        let day = journal
            .days
            .get_mut(&date)
            .ok_or_else(|| CoreError::DayNotFound(date.to_string()))?;
        let idx = day
            .exercise_entries
            .iter()
            .position(|e| e.id == entry_id)
            .ok_or_else(|| CoreError::EntryNotFound(entry_id.to_string()))?;
        day.exercise_entries.remove(idx);
        Ok(())
    }

    /// Replace a day's goals snapshot (creating the day if needed).
    pub fn set_goals(&self, journal: &mut Journal, date: NaiveDate, goals: DailyGoals) {
        self.ensure_day(journal, date).goals = goals;
    }

    /// Record a weigh-in. Upserts by calendar date: a second weigh-in on
    /// the same date replaces the first. Returns the entry's id.
    pub fn record_weight(
        &self,
        journal: &mut Journal,
        date: NaiveDate,
        weight: f64,
    ) -> Result<Uuid, CoreError> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Weight must be a positive number, got {weight}"
            )));
        }
        let entry = WeightEntry::new(weight, date);
        let id = entry.id;
        journal.put_weight_entry(entry);
        Ok(id)
    }
}

impl Default for JournalService {
    fn default() -> Self {
        Self::new()
    }
}
