use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::day::DailyData;
use super::settings::Settings;
use super::weight::WeightEntry;

/// The main data container. Everything in here gets serialized to the
/// JSON snapshot the surrounding application persists.
///
/// This is the in-memory realization of the persistence contract:
/// get-by-date, get-all, upsert-by-date for daily records, and the same
/// upsert semantics for the global weight list. Last writer for a given
/// date wins — no merge semantics exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    /// Daily records keyed by calendar date (ascending iteration order).
    /// The key and `DailyData.date` always agree — `put_day` enforces it.
    pub days: BTreeMap<NaiveDate, DailyData>,

    /// All weigh-ins, sorted by date, at most one per calendar date.
    pub weight_entries: Vec<WeightEntry>,

    /// User settings (default goals, target weight).
    pub settings: Settings,
}

impl Default for Journal {
    fn default() -> Self {
        Self {
            days: BTreeMap::new(),
            weight_entries: Vec::new(),
            settings: Settings::default(),
        }
    }
}

impl Journal {
    /// Look up the daily record for a date, if one exists.
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&DailyData> {
        self.days.get(&date)
    }

    /// All daily records in ascending date order.
    pub fn days(&self) -> impl Iterator<Item = &DailyData> {
        self.days.values()
    }

    /// Upsert a daily record, keyed by its own date.
    pub fn put_day(&mut self, day: DailyData) {
        self.days.insert(day.date, day);
    }

    /// All weigh-ins in ascending date order.
    #[must_use]
    pub fn weight_entries(&self) -> &[WeightEntry] {
        &self.weight_entries
    }

    /// Upsert a weigh-in keyed by calendar date: an existing entry for the
    /// same date is replaced, otherwise the entry is inserted keeping the
    /// list date-sorted.
    pub fn put_weight_entry(&mut self, entry: WeightEntry) {
        if let Some(existing) = self
            .weight_entries
            .iter_mut()
            .find(|e| e.date == entry.date)
        {
            *existing = entry;
            return;
        }
        let pos = self
            .weight_entries
            .binary_search_by_key(&entry.date, |e| e.date)
            .unwrap_or_else(|pos| pos);
        self.weight_entries.insert(pos, entry);
    }
}
