use crate::models::{AlertDescriptor, AlertKind, Reading, VitalsStatus};

pub const HIGH_HEART_RATE_BPM: i64 = 95;
pub const LOW_HEART_RATE_BPM: i64 = 60;
pub const LOW_BLOOD_OXYGEN_PCT: i64 = 95;

/// Classify a reading against the fixed thresholds.
///
/// Returns the derived status and, when anomalous, the descriptor for the alert
/// feed. The descriptor rules are checked in a fixed order and the first match
/// wins: a reading with both a low heart rate and low blood oxygen reports
/// `LowBloodOxygen`, matching the dashboard's historical priority.
pub fn classify(reading: &Reading) -> (VitalsStatus, Option<AlertDescriptor>) {
    let anomalous = reading.heart_rate > HIGH_HEART_RATE_BPM
        || reading.heart_rate < LOW_HEART_RATE_BPM
        || reading.blood_oxygen < LOW_BLOOD_OXYGEN_PCT;

    if !anomalous {
        return (VitalsStatus::Normal, None);
    }

    let descriptor = if reading.heart_rate > HIGH_HEART_RATE_BPM {
        AlertDescriptor::new(AlertKind::HighHeartRate, reading.heart_rate)
    } else if reading.blood_oxygen < LOW_BLOOD_OXYGEN_PCT {
        AlertDescriptor::new(AlertKind::LowBloodOxygen, reading.blood_oxygen)
    } else {
        AlertDescriptor::new(AlertKind::AbnormalReading, reading.heart_rate)
    };

    (VitalsStatus::Alert, Some(descriptor))
}
