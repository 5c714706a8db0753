use serde::{Deserialize, Serialize};

/// Words a person writes by hand in one hour.
const WORDS_PER_HOUR: f64 = 500.0;

/// Usage statistics for the current calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStats {
    pub words_generated: u64,
    pub articles_created: u64,
    /// Estimated hours saved, formatted like `"1.5h"`.
    pub time_saved: String,
}

impl UsageStats {
    pub fn new(words_generated: u64, articles_created: u64) -> Self {
        Self {
            words_generated,
            articles_created,
            time_saved: format!("{}h", Self::hours_saved(words_generated)),
        }
    }

    /// Hours saved rounded to one decimal place.
    pub fn hours_saved(words_generated: u64) -> f64 {
        (words_generated as f64 / WORDS_PER_HOUR * 10.0).round() / 10.0
    }
}
