use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::config::MonitorConfig;
use crate::models::{ActivityLevel, Reading, VitalsStatus};

/// Why a health-data fetch failed. Both classes recover identically (the source
/// falls back to simulated data) but they get distinct log lines.
#[derive(Debug)]
pub enum FetchError {
    /// Endpoint unreachable, timed out, or returned a non-success status
    Transport(anyhow::Error),
    /// Response arrived but could not be decoded into a health payload
    Payload(anyhow::Error),
}

/// Wire shape of `GET {base_url}/health-data`.
///
/// `heart_rate` and `blood_oxygen` are required; a payload missing either fails
/// to decode and counts as a malformed payload. `status`/`anomaly` carry the
/// backend's own verdict, which the monitor compares against its local
/// classification but does not trust over it.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthDataPayload {
    pub heart_rate: i64,
    pub blood_oxygen: i64,
    pub sleep_hours: f64,
    pub activity_level: ActivityLevel,
    pub status: Option<VitalsStatus>,
    pub anomaly: Option<bool>,
    pub timestamp: Option<String>,
}

impl HealthDataPayload {
    pub fn to_reading(&self) -> Reading {
        Reading {
            heart_rate: self.heart_rate,
            blood_oxygen: self.blood_oxygen,
            sleep_hours: self.sleep_hours,
            activity_level: self.activity_level,
            taken_at: Utc::now(),
        }
    }
}

/// Wire shape of the prediction collaborator's response.
#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    pub prediction: String,
    pub confidence: f64,
    pub heart_rate: i64,
    pub blood_oxygen: i64,
    pub timestamp: Option<String>,
}

/// Wire shape of `GET {base_url}/recommendations`.
#[derive(Debug, Clone, Deserialize)]
pub struct Recommendations {
    pub exercise: Vec<String>,
    pub sleep: Vec<String>,
    pub nutrition: Vec<String>,
}

/// Thin client for the backend endpoints. Cheap to clone; every request is
/// bounded by the configured fetch timeout.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &MonitorConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.fetch_timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub async fn health_data(&self) -> Result<HealthDataPayload, FetchError> {
        let url = format!("{}/health-data", self.base_url);
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| FetchError::Transport(anyhow!("health-data request failed: {err}")))?;

        let response = response
            .error_for_status()
            .map_err(|err| FetchError::Transport(anyhow!("health-data returned an error status: {err}")))?;

        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Transport(anyhow!("health-data body read failed: {err}")))?;

        serde_json::from_str(&body)
            .map_err(|err| FetchError::Payload(anyhow!("invalid health-data payload: {err}")))
    }

    pub async fn predict(&self, heart_rate: i64, blood_oxygen: i64) -> Result<Prediction> {
        let url = format!("{}/predict", self.base_url);
        debug!("POST {url}");

        let body = serde_json::json!({
            "heart_rate": heart_rate,
            "blood_oxygen": blood_oxygen,
        });

        self.http
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("predict request failed")?
            .error_for_status()
            .context("predict returned an error status")?
            .json()
            .await
            .context("invalid predict payload")
    }

    pub async fn recommendations(&self) -> Result<Recommendations> {
        let url = format!("{}/recommendations", self.base_url);
        debug!("GET {url}");

        self.http
            .get(&url)
            .send()
            .await
            .context("recommendations request failed")?
            .error_for_status()
            .context("recommendations returned an error status")?
            .json()
            .await
            .context("invalid recommendations payload")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_payload_decodes_backend_shape() {
        let payload: HealthDataPayload = serde_json::from_str(
            r#"{
                "heart_rate": 102,
                "blood_oxygen": 97,
                "sleep_hours": 7.2,
                "activity_level": "High",
                "status": "Alert",
                "anomaly": true,
                "timestamp": "2026-08-06T10:00:00"
            }"#,
        )
        .unwrap();

        assert_eq!(payload.heart_rate, 102);
        assert_eq!(payload.blood_oxygen, 97);
        assert_eq!(payload.activity_level, ActivityLevel::High);
        assert_eq!(payload.status, Some(VitalsStatus::Alert));
        assert_eq!(payload.anomaly, Some(true));

        let reading = payload.to_reading();
        assert_eq!(reading.heart_rate, 102);
        assert_eq!(reading.sleep_hours, 7.2);
    }

    #[test]
    fn missing_heart_rate_is_a_decode_error() {
        let result = serde_json::from_str::<HealthDataPayload>(
            r#"{"blood_oxygen": 97, "sleep_hours": 7.2, "activity_level": "Low"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn prediction_decodes_backend_shape() {
        let prediction: Prediction = serde_json::from_str(
            r#"{
                "prediction": "Normal",
                "confidence": 87.5,
                "heart_rate": 72,
                "blood_oxygen": 98,
                "timestamp": "2026-08-06T10:00:00"
            }"#,
        )
        .unwrap();

        assert_eq!(prediction.prediction, "Normal");
        assert_eq!(prediction.confidence, 87.5);
    }
}
