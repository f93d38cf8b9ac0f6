use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Activity buckets the backend reports. Serialized exactly as the wire strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "Low",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::High => "High",
        }
    }
}

/// One vitals snapshot, either received from the backend or locally simulated.
///
/// `heart_rate` and `blood_oxygen` are always present; a payload missing either
/// never becomes a `Reading` (it is treated as a fetch failure upstream).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub heart_rate: i64,
    pub blood_oxygen: i64,
    pub sleep_hours: f64,
    pub activity_level: ActivityLevel,
    pub taken_at: DateTime<Utc>,
}
