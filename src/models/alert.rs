use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlertKind {
    HighHeartRate,
    LowBloodOxygen,
    AbnormalReading,
}

impl AlertKind {
    /// Display label used by the alert feed.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::HighHeartRate => "High Heart Rate",
            AlertKind::LowBloodOxygen => "Low Blood Oxygen",
            AlertKind::AbnormalReading => "Abnormal Reading",
        }
    }
}

/// One recorded anomaly: which rule fired, the offending value, and the local
/// wall-clock time it was observed (display form, the feed shows it verbatim).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertDescriptor {
    pub kind: AlertKind,
    pub value: i64,
    pub occurred_at: String,
}

impl AlertDescriptor {
    pub fn new(kind: AlertKind, value: i64) -> Self {
        Self {
            kind,
            value,
            occurred_at: Local::now().format("%H:%M:%S").to_string(),
        }
    }
}
