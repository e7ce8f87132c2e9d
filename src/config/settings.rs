//! User settings for spendlog
//!
//! Manages display preferences and how much each dashboard panel shows.

use serde::{Deserialize, Serialize};

use super::paths::SpendlogPaths;
use crate::error::SpendlogError;
use crate::reports::TimeRange;

/// User settings for spendlog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format) for display
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Fall back to the sample dataset when a store key has never been written
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,

    /// Number of expenses in the "recent" panel
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Number of categories in the "top categories" panel
    #[serde(default = "default_top_categories")]
    pub top_categories: usize,

    /// Number of category budgets previewed on the dashboard
    #[serde(default = "default_budget_preview")]
    pub budget_preview: usize,

    /// Trend range used when none is given
    #[serde(default)]
    pub default_range: TimeRange,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_true() -> bool {
    true
}

fn default_recent_limit() -> usize {
    5
}

fn default_top_categories() -> usize {
    3
}

fn default_budget_preview() -> usize {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            seed_sample_data: default_true(),
            recent_limit: default_recent_limit(),
            top_categories: default_top_categories(),
            budget_preview: default_budget_preview(),
            default_range: TimeRange::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &SpendlogPaths) -> Result<Self, SpendlogError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SpendlogError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendlogError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not persisted until the caller asks
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendlogPaths) -> Result<(), SpendlogError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SpendlogError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            SpendlogError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
