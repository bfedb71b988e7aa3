use crate::errors::CoreError;
use crate::models::journal::Journal;

use super::format;

/// High-level storage operations: save/load the journal to/from snapshot
/// strings or files.
///
/// The string forms work everywhere (the surrounding application decides
/// where the snapshot lives); the file forms are native-only convenience.
pub struct StorageManager;

impl StorageManager {
    /// Serialize a journal to a portable snapshot string.
    pub fn save_to_string(journal: &Journal) -> Result<String, CoreError> {
        format::encode(journal)
    }

    /// Deserialize a journal from a snapshot string.
    pub fn load_from_string(data: &str) -> Result<Journal, CoreError> {
        format::decode(data)
    }

    /// Save the journal to a file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(journal: &Journal, path: &str) -> Result<(), CoreError> {
        let data = Self::save_to_string(journal)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Load the journal from a file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Journal, CoreError> {
        let data = std::fs::read_to_string(path)?;
        Self::load_from_string(&data)
    }
}
