pub mod remote;
pub mod simulate;

pub use remote::{ApiClient, FetchError, HealthDataPayload, Prediction, Recommendations};
pub use simulate::simulated_reading;

use log::{debug, warn};

use crate::classifier::classify;
use crate::models::{Reading, VitalsStatus};

/// Supplies one vitals reading per call: the backend when reachable, the local
/// simulator otherwise. Fallback is logged but never surfaced to the caller.
pub struct ReadingSource {
    api: ApiClient,
}

impl ReadingSource {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Never fails: transport and payload failures both fall back to a
    /// simulated reading, with a distinct warning for each class.
    pub async fn next_reading(&self) -> Reading {
        match self.api.health_data().await {
            Ok(payload) => {
                let reading = payload.to_reading();
                if let Some(upstream_anomaly) = payload.anomaly {
                    let (local, _) = classify(&reading);
                    let local_anomaly = local == VitalsStatus::Alert;
                    if upstream_anomaly != local_anomaly {
                        debug!(
                            "backend anomaly flag ({upstream_anomaly}) disagrees with local classification ({})",
                            local.as_str()
                        );
                    }
                }
                reading
            }
            Err(FetchError::Transport(err)) => {
                warn!("health endpoint unavailable, using simulated data: {err:#}");
                simulated_reading()
            }
            Err(FetchError::Payload(err)) => {
                warn!("malformed health payload, using simulated data: {err:#}");
                simulated_reading()
            }
        }
    }
}
