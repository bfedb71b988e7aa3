use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::journal::Journal;

/// Current snapshot format version.
pub const CURRENT_VERSION: u16 = 1;

/// Versioned envelope around the serialized journal.
///
/// The snapshot is plain JSON so any host (browser local storage, a file
/// on disk, a key-value store) can persist it as an opaque string.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version, checked on load.
    pub version: u16,

    /// The full journal state.
    pub journal: Journal,
}

/// Serialize a journal into a versioned JSON snapshot string.
pub fn encode(journal: &Journal) -> Result<String, CoreError> {
    let snapshot = Snapshot {
        version: CURRENT_VERSION,
        journal: journal.clone(),
    };
    serde_json::to_string(&snapshot)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize journal: {e}")))
}

/// Parse a snapshot string back into a journal, validating the version.
pub fn decode(data: &str) -> Result<Journal, CoreError> {
    let snapshot: Snapshot = serde_json::from_str(data).map_err(|e| {
        CoreError::InvalidFileFormat(format!("Not a valid journal snapshot: {e}"))
    })?;

    if snapshot.version == 0 || snapshot.version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(snapshot.version));
    }

    Ok(snapshot.journal)
}
