use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single card record as owned by the catalog. Read-only once loaded.
///
/// `card_def_id` is the canonical unique identifier; `short_name` is the
/// compact secondary identifier used in short-form deckcodes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub card_def_id: String,
    pub short_name: String,
    pub name: String,
    pub cost: String,
    pub power: String,
    pub description: String,
    pub release_date: DateTime<Utc>,
    pub obtainable: bool,
}

impl Card {
    /// Cost carries numeric-as-text semantics; unparseable text counts as 0.
    pub fn cost_value(&self) -> i64 {
        self.cost.trim().parse().unwrap_or(0)
    }

    pub fn power_value(&self) -> i64 {
        self.power.trim().parse().unwrap_or(0)
    }
}
