pub mod classifier;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use classifier::ParsedEntry;
use errors::CoreError;
use models::{
    day::{DailyData, DailyTotals},
    entry::{ExerciseEntry, FoodEntry},
    goals::DailyGoals,
    journal::Journal,
    settings::Settings,
    summary::{Insight, WeekBreakdown, WeeklyWeightChange, WeightProgress, WindowDay, WindowSummary},
    weight::WeightEntry,
};
use providers::{registry::ParserRegistry, traits::EntryParser};
use services::{
    aggregation_service::AggregationService, insight_service::InsightService,
    journal_service::JournalService, weight_service::WeightService,
};
use storage::manager::StorageManager;

/// Main entry point for the Health Tracker core library.
/// Holds the journal state and all services needed to operate on it.
#[must_use]
pub struct HealthTracker {
    journal: Journal,
    journal_service: JournalService,
    aggregation_service: AggregationService,
    weight_service: WeightService,
    weekly_rules: InsightService,
    monthly_rules: InsightService,
    parsers: ParserRegistry,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for HealthTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthTracker")
            .field("days", &self.journal.days.len())
            .field("weight_entries", &self.journal.weight_entries.len())
            .field("settings", &self.journal.settings)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Default for HealthTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthTracker {
    /// Create a brand new empty journal with default settings.
    pub fn new() -> Self {
        Self::build(Journal::default())
    }

    /// Load an existing journal from a snapshot string.
    /// Use this where the surrounding application handles persistence.
    pub fn load_from_str(data: &str) -> Result<Self, CoreError> {
        let journal = StorageManager::load_from_string(data)?;
        tracing::debug!(days = journal.days.len(), "journal snapshot loaded");
        Ok(Self::build(journal))
    }

    /// Save the current journal to a snapshot string the surrounding
    /// application can persist. Clears the unsaved-changes flag on success.
    pub fn save_to_string(&mut self) -> Result<String, CoreError> {
        let data = StorageManager::save_to_string(&self.journal)?;
        tracing::debug!(days = self.journal.days.len(), "journal snapshot saved");
        self.dirty = false;
        Ok(data)
    }

    /// Load from a snapshot file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Self, CoreError> {
        let journal = StorageManager::load_from_file(path)?;
        Ok(Self::build(journal))
    }

    /// Save to a snapshot file on disk (native only).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: &str) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.journal, path)?;
        self.dirty = false;
        Ok(())
    }

    /// Returns `true` if the journal has been modified since the last
    /// save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Entry Logging ───────────────────────────────────────────────

    /// Parse a free-text utterance and append the resulting entry to the
    /// given day, creating the day if needed. Tries registered parsers in
    /// priority order, falling back to the offline keyword classifier.
    /// Returns the new entry's id.
    pub async fn log_entry(&mut self, date: NaiveDate, input: &str) -> Result<Uuid, CoreError> {
        let parsed = self.parsers.parse(input).await;
        tracing::debug!(date = %date, name = parsed.name(), "entry parsed");
        let id = self
            .journal_service
            .apply_parsed(&mut self.journal, date, &parsed, Utc::now())?;
        self.dirty = true;
        Ok(id)
    }

    /// Like [`log_entry`](Self::log_entry), but strictly offline: only the
    /// deterministic keyword classifier runs. Never touches the network,
    /// never fails to produce an entry.
    pub fn log_entry_offline(&mut self, date: NaiveDate, input: &str) -> Result<Uuid, CoreError> {
        let parsed = classifier::parse_entry(input);
        let id = self
            .journal_service
            .apply_parsed(&mut self.journal, date, &parsed, Utc::now())?;
        self.dirty = true;
        Ok(id)
    }

    /// Parse an utterance without recording anything (for previews).
    #[must_use]
    pub fn parse_preview(&self, input: &str) -> ParsedEntry {
        classifier::parse_entry(input)
    }

    /// Register an external entry parser (e.g. a hosted text-completion
    /// service) ahead of the built-in keyword parser.
    pub fn register_parser(&mut self, parser: Box<dyn EntryParser>) {
        self.parsers.register_primary(parser);
    }

    /// Add a fully specified food entry to a day. Returns the entry's id.
    pub fn add_food_entry(
        &mut self,
        date: NaiveDate,
        entry: FoodEntry,
    ) -> Result<Uuid, CoreError> {
        let id = self
            .journal_service
            .add_food_entry(&mut self.journal, date, entry)?;
        self.dirty = true;
        Ok(id)
    }

    /// Add a fully specified exercise entry to a day. Returns the entry's id.
    pub fn add_exercise_entry(
        &mut self,
        date: NaiveDate,
        entry: ExerciseEntry,
    ) -> Result<Uuid, CoreError> {
        let id = self
            .journal_service
            .add_exercise_entry(&mut self.journal, date, entry)?;
        self.dirty = true;
        Ok(id)
    }

    /// Remove a food entry by id from a day's record.
    pub fn remove_food_entry(&mut self, date: NaiveDate, entry_id: Uuid) -> Result<(), CoreError> {
        self.journal_service
            .remove_food_entry(&mut self.journal, date, entry_id)?;
        self.dirty = true;
        Ok(())
    }

    /// Remove an exercise entry by id from a day's record.
    pub fn remove_exercise_entry(
        &mut self,
        date: NaiveDate,
        entry_id: Uuid,
    ) -> Result<(), CoreError> {
        self.journal_service
            .remove_exercise_entry(&mut self.journal, date, entry_id)?;
        self.dirty = true;
        Ok(())
    }

    // ── Days & Goals ────────────────────────────────────────────────

    /// Get the daily record for a date, if anything was tracked.
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&DailyData> {
        self.journal.day(date)
    }

    /// Get the daily record for a date, creating an empty one with the
    /// default goals on first access.
    pub fn ensure_day(&mut self, date: NaiveDate) -> &DailyData {
        if self.journal.day(date).is_none() {
            self.dirty = true;
        }
        self.journal_service.ensure_day(&mut self.journal, date)
    }

    /// Replace the goals snapshot for one day (creating the day if needed).
    pub fn set_goals_for(&mut self, date: NaiveDate, goals: DailyGoals) {
        self.journal_service.set_goals(&mut self.journal, date, goals);
        self.dirty = true;
    }

    /// Goals applied to days that have never been given their own snapshot.
    #[must_use]
    pub fn default_goals(&self) -> DailyGoals {
        self.journal.settings.default_goals
    }

    /// Set the default goals for newly created days. Existing days keep
    /// their snapshots.
    pub fn set_default_goals(&mut self, goals: DailyGoals) {
        self.journal.settings.default_goals = goals;
        self.dirty = true;
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.journal.settings
    }

    // ── Aggregation ─────────────────────────────────────────────────

    /// Derived totals for one day. A date with no record yields all-zero
    /// sums against the default goals.
    #[must_use]
    pub fn daily_totals(&self, date: NaiveDate) -> DailyTotals {
        match self.journal.day(date) {
            Some(day) => self.aggregation_service.daily_totals(day),
            None => self
                .aggregation_service
                .daily_totals(&DailyData::new(date, self.journal.settings.default_goals)),
        }
    }

    /// Dense 7-day window for the Monday-started week containing `anchor`.
    #[must_use]
    pub fn week_window(&self, anchor: NaiveDate) -> Vec<WindowDay> {
        let (start, end) = self.aggregation_service.week_bounds(anchor);
        let dates = self.aggregation_service.date_range(start, end);
        self.aggregation_service.build_window(&self.journal, &dates)
    }

    /// Summary over the week containing `anchor`, or `None` when no day
    /// in that week was tracked.
    #[must_use]
    pub fn week_summary(&self, anchor: NaiveDate) -> Option<WindowSummary> {
        let window = self.week_window(anchor);
        self.aggregation_service.summarize_window(&window)
    }

    /// Dense window covering a whole calendar month.
    pub fn month_window(&self, year: i32, month: u32) -> Result<Vec<WindowDay>, CoreError> {
        let (start, end) = self
            .aggregation_service
            .month_bounds(year, month)
            .ok_or_else(|| {
                CoreError::ValidationError(format!("Invalid year/month: {year}-{month:02}"))
            })?;
        let dates = self.aggregation_service.date_range(start, end);
        Ok(self.aggregation_service.build_window(&self.journal, &dates))
    }

    /// Summary over a calendar month, or `Ok(None)` when no day in the
    /// month was tracked.
    pub fn month_summary(&self, year: i32, month: u32) -> Result<Option<WindowSummary>, CoreError> {
        let window = self.month_window(year, month)?;
        Ok(self.aggregation_service.summarize_window(&window))
    }

    /// Per-week breakdown of a calendar month (1-based week index,
    /// consecutive 7-day chunks, weeks without data omitted).
    pub fn weekly_breakdown(&self, year: i32, month: u32) -> Result<Vec<WeekBreakdown>, CoreError> {
        let window = self.month_window(year, month)?;
        Ok(self.aggregation_service.weekly_breakdown(&window))
    }

    /// Insights for a weekly summary, in rule-table order.
    #[must_use]
    pub fn weekly_insights(&self, summary: &WindowSummary) -> Vec<Insight> {
        self.weekly_rules.evaluate(summary)
    }

    /// Insights for a monthly summary, in rule-table order.
    #[must_use]
    pub fn monthly_insights(&self, summary: &WindowSummary) -> Vec<Insight> {
        self.monthly_rules.evaluate(summary)
    }

    // ── Weight ──────────────────────────────────────────────────────

    /// Record a weigh-in for a date. A second weigh-in on the same date
    /// replaces the first. Returns the entry's id.
    pub fn record_weight(&mut self, date: NaiveDate, weight: f64) -> Result<Uuid, CoreError> {
        let id = self
            .journal_service
            .record_weight(&mut self.journal, date, weight)?;
        self.dirty = true;
        Ok(id)
    }

    /// All weigh-ins in ascending date order.
    #[must_use]
    pub fn weight_entries(&self) -> &[WeightEntry] {
        self.journal.weight_entries()
    }

    /// Target body weight, if set.
    #[must_use]
    pub fn target_weight(&self) -> Option<f64> {
        self.journal.settings.target_weight
    }

    /// Set or clear the target body weight.
    pub fn set_target_weight(&mut self, target: Option<f64>) -> Result<(), CoreError> {
        if let Some(weight) = target {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "Target weight must be a positive number, got {weight}"
                )));
            }
        }
        self.journal.settings.target_weight = target;
        self.dirty = true;
        Ok(())
    }

    /// Latest weight minus earliest weight, `None` with fewer than two
    /// weigh-ins.
    #[must_use]
    pub fn weight_overall_change(&self) -> Option<f64> {
        self.weight_service.overall_change(&self.journal.weight_entries)
    }

    /// Progress toward the configured target weight. `None` when no
    /// target is set, fewer than two weigh-ins exist, or the target
    /// equals the starting weight.
    #[must_use]
    pub fn weight_target_progress(&self) -> Option<WeightProgress> {
        let target = self.journal.settings.target_weight?;
        self.weight_service
            .target_progress(&self.journal.weight_entries, target)
    }

    /// Week-over-week weight movement, `None` when no weigh-in is at
    /// least 7 days older than the latest.
    #[must_use]
    pub fn weight_weekly_change(&self) -> Option<WeeklyWeightChange> {
        self.weight_service.weekly_change(&self.journal.weight_entries)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export the full journal as JSON (unencrypted snapshot for
    /// debugging/display).
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.journal)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize journal: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(journal: Journal) -> Self {
        Self {
            journal,
            journal_service: JournalService::new(),
            aggregation_service: AggregationService::new(),
            weight_service: WeightService::new(),
            weekly_rules: InsightService::weekly(),
            monthly_rules: InsightService::monthly(),
            parsers: ParserRegistry::new_with_defaults(),
            dirty: false,
        }
    }
}
