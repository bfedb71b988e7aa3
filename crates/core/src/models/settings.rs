use serde::{Deserialize, Serialize};

use super::goals::DailyGoals;

/// User-configurable settings, stored inside the journal snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Goals applied to any day that has never been given its own snapshot.
    pub default_goals: DailyGoals,

    /// Target body weight (kg), if the user set one.
    #[serde(default)]
    pub target_weight: Option<f64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_goals: DailyGoals::default(),
            target_weight: None,
        }
    }
}
