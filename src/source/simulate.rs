use chrono::Utc;
use rand::Rng;

use crate::models::{ActivityLevel, Reading};

/// Generate a plausible reading locally, matching the value ranges the backend
/// produces for a healthy subject. Sleep hours are sampled as whole tenths so
/// the value is always one decimal place and stays below 9.0.
pub fn simulated_reading() -> Reading {
    let mut rng = rand::thread_rng();

    let heart_rate = rng.gen_range(60..=99);
    let blood_oxygen = rng.gen_range(92..=99);
    let sleep_hours = rng.gen_range(60..90) as f64 / 10.0;
    let activity_level = match rng.gen_range(0..3) {
        0 => ActivityLevel::Low,
        1 => ActivityLevel::Moderate,
        _ => ActivityLevel::High,
    };

    Reading {
        heart_rate,
        blood_oxygen,
        sleep_hours,
        activity_level,
        taken_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_the_documented_ranges() {
        for _ in 0..1000 {
            let reading = simulated_reading();
            assert!((60..=99).contains(&reading.heart_rate), "heart_rate {}", reading.heart_rate);
            assert!((92..=99).contains(&reading.blood_oxygen), "blood_oxygen {}", reading.blood_oxygen);
            assert!(
                reading.sleep_hours >= 6.0 && reading.sleep_hours < 9.0,
                "sleep_hours {}",
                reading.sleep_hours
            );
        }
    }

    #[test]
    fn sleep_hours_are_whole_tenths() {
        for _ in 0..1000 {
            let reading = simulated_reading();
            let tenths = reading.sleep_hours * 10.0;
            assert!(
                (tenths - tenths.round()).abs() < 1e-9,
                "sleep_hours {}",
                reading.sleep_hours
            );
        }
    }
}
