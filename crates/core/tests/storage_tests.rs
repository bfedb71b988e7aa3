// ═══════════════════════════════════════════════════════════════════
// Storage Tests — versioned snapshot encode/decode and file round trips
// ═══════════════════════════════════════════════════════════════════

use chrono::{NaiveDate, Utc};

use health_tracker_core::errors::CoreError;
use health_tracker_core::models::day::DailyData;
use health_tracker_core::models::entry::FoodEntry;
use health_tracker_core::models::goals::DailyGoals;
use health_tracker_core::models::journal::Journal;
use health_tracker_core::models::weight::WeightEntry;
use health_tracker_core::storage::format::{self, Snapshot, CURRENT_VERSION};
use health_tracker_core::storage::manager::StorageManager;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_journal() -> Journal {
    let mut journal = Journal::default();
    let mut day = DailyData::new(date(2025, 3, 10), DailyGoals::default());
    day.food_entries
        .push(FoodEntry::new("Oatmeal", 150, 19, 8, 5, "1 bowl", Utc::now()));
    journal.put_day(day);
    journal.put_weight_entry(WeightEntry::new(80.0, date(2025, 3, 10)));
    journal.settings.target_weight = Some(75.0);
    journal
}

#[test]
fn snapshot_round_trips() {
    let journal = sample_journal();
    let encoded = format::encode(&journal).unwrap();
    let decoded = format::decode(&encoded).unwrap();
    assert_eq!(decoded, journal);
}

#[test]
fn snapshot_carries_the_current_version() {
    let encoded = format::encode(&Journal::default()).unwrap();
    let snapshot: Snapshot = serde_json::from_str(&encoded).unwrap();
    assert_eq!(snapshot.version, CURRENT_VERSION);
}

#[test]
fn garbage_input_is_an_invalid_format() {
    for garbage in ["", "not json at all", "{\"version\":1}", "[1,2,3]"] {
        let result = format::decode(garbage);
        assert!(
            matches!(result, Err(CoreError::InvalidFileFormat(_))),
            "input: {garbage:?}"
        );
    }
}

#[test]
fn unknown_versions_are_rejected() {
    let future = Snapshot {
        version: CURRENT_VERSION + 1,
        journal: Journal::default(),
    };
    let data = serde_json::to_string(&future).unwrap();
    let result = format::decode(&data);
    assert!(matches!(result, Err(CoreError::UnsupportedVersion(v)) if v == CURRENT_VERSION + 1));

    let zero = Snapshot {
        version: 0,
        journal: Journal::default(),
    };
    let data = serde_json::to_string(&zero).unwrap();
    assert!(matches!(
        format::decode(&data),
        Err(CoreError::UnsupportedVersion(0))
    ));
}

#[test]
fn manager_string_round_trip() {
    let journal = sample_journal();
    let data = StorageManager::save_to_string(&journal).unwrap();
    let restored = StorageManager::load_from_string(&data).unwrap();
    assert_eq!(restored, journal);
}

#[test]
fn manager_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.json");
    let path = path.to_str().unwrap();

    let journal = sample_journal();
    StorageManager::save_to_file(&journal, path).unwrap();
    let restored = StorageManager::load_from_file(path).unwrap();
    assert_eq!(restored, journal);
}

#[test]
fn loading_a_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    let result = StorageManager::load_from_file(path.to_str().unwrap());
    assert!(matches!(result, Err(CoreError::FileIO(_))));
}

#[test]
fn save_overwrites_an_existing_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.json");
    let path = path.to_str().unwrap();

    StorageManager::save_to_file(&sample_journal(), path).unwrap();
    StorageManager::save_to_file(&Journal::default(), path).unwrap();

    let restored = StorageManager::load_from_file(path).unwrap();
    assert_eq!(restored, Journal::default());
}
