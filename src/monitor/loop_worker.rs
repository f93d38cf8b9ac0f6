use std::sync::Arc;

use chrono::Utc;
use log::{info, warn};
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::alerts::AlertLog;
use crate::classifier::classify;
use crate::config::MonitorConfig;
use crate::models::VitalsState;
use crate::source::{ApiClient, ReadingSource};

use super::state::MonitorState;

/// Everything one polling session needs; built by the controller, consumed by
/// the loop task.
pub(super) struct PollWorker {
    pub session_id: String,
    pub config: MonitorConfig,
    pub source: ReadingSource,
    pub api: ApiClient,
    pub vitals: Arc<Mutex<VitalsState>>,
    pub alerts: AlertLog,
    pub state: Arc<Mutex<MonitorState>>,
}

pub(super) async fn poll_loop(worker: PollWorker, cancel_token: CancellationToken) {
    let mut ticker = tokio::time::interval(worker.config.poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let ticks = run_tick(&worker).await;

                if worker.config.predict_every_ticks > 0
                    && ticks % worker.config.predict_every_ticks == 0
                {
                    spawn_prediction(&worker).await;
                }
            }
            // Checked between ticks: an in-flight tick finishes before the
            // loop observes cancellation.
            _ = cancel_token.cancelled() => {
                info!("poll loop for session {} shutting down", worker.session_id);
                break;
            }
        }
    }
}

/// One fetch → classify → state-update sequence. Awaited to completion before
/// the next tick, so ticks never overlap.
async fn run_tick(worker: &PollWorker) -> u64 {
    let reading = worker.source.next_reading().await;
    let (status, alert) = classify(&reading);

    {
        let mut vitals = worker.vitals.lock().await;
        *vitals = VitalsState::from_reading(&reading, status);
    }

    if let Some(alert) = alert {
        warn!(
            "vitals alert: {} ({}) at {}",
            alert.kind.as_str(),
            alert.value,
            alert.occurred_at
        );
        worker.alerts.append(alert).await;
    }

    let mut state = worker.state.lock().await;
    state.record_tick(Utc::now())
}

/// Fire the prediction collaborator with the current vitals. The response is
/// only logged; failures never affect the loop.
async fn spawn_prediction(worker: &PollWorker) {
    let (heart_rate, blood_oxygen) = {
        let vitals = worker.vitals.lock().await;
        (vitals.heart_rate, vitals.blood_oxygen)
    };

    let api = worker.api.clone();
    let session_id = worker.session_id.clone();
    tokio::spawn(async move {
        match api.predict(heart_rate, blood_oxygen).await {
            Ok(prediction) => info!(
                "prediction for session {session_id}: {} ({:.1}% confidence)",
                prediction.prediction, prediction.confidence
            ),
            Err(err) => warn!("prediction service unavailable: {err:#}"),
        }
    });
}
