use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ActivityLevel, Reading};

/// Derived per-reading verdict. Matches the backend's `status` strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VitalsStatus {
    Normal,
    Alert,
}

impl VitalsStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VitalsStatus::Normal => "Normal",
            VitalsStatus::Alert => "Alert",
        }
    }
}

/// The current accepted reading plus its derived status. Overwritten wholesale
/// on each successful poll; partial updates are never merged in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsState {
    pub heart_rate: i64,
    pub blood_oxygen: i64,
    pub sleep_hours: f64,
    pub activity_level: ActivityLevel,
    pub status: VitalsStatus,
    pub updated_at: DateTime<Utc>,
}

impl VitalsState {
    /// The dashboard's pre-first-poll placeholder values.
    pub fn placeholder() -> Self {
        Self {
            heart_rate: 72,
            blood_oxygen: 98,
            sleep_hours: 7.5,
            activity_level: ActivityLevel::Moderate,
            status: VitalsStatus::Normal,
            updated_at: Utc::now(),
        }
    }

    pub fn from_reading(reading: &Reading, status: VitalsStatus) -> Self {
        Self {
            heart_rate: reading.heart_rate,
            blood_oxygen: reading.blood_oxygen,
            sleep_hours: reading.sleep_hours,
            activity_level: reading.activity_level,
            status,
            updated_at: Utc::now(),
        }
    }
}

impl Default for VitalsState {
    fn default() -> Self {
        Self::placeholder()
    }
}
