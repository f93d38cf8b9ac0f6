use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use log::info;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::alerts::AlertLog;
use crate::config::MonitorConfig;
use crate::models::{AlertDescriptor, VitalsState};
use crate::source::{ApiClient, ReadingSource};

use super::loop_worker::{poll_loop, PollWorker};
use super::state::MonitorState;

struct Worker {
    handle: JoinHandle<()>,
    cancel_token: CancellationToken,
}

/// One monitoring session, owned by the caller. Holds the shared vitals state
/// and alert feed the display layer reads, and the handle to the poll loop.
pub struct VitalsMonitor {
    config: MonitorConfig,
    api: ApiClient,
    vitals: Arc<Mutex<VitalsState>>,
    alerts: AlertLog,
    state: Arc<Mutex<MonitorState>>,
    worker: Mutex<Option<Worker>>,
}

impl VitalsMonitor {
    pub fn new(config: MonitorConfig) -> Result<Self> {
        let api = ApiClient::new(&config)?;

        Ok(Self {
            config,
            api,
            vitals: Arc::new(Mutex::new(VitalsState::placeholder())),
            alerts: AlertLog::new(),
            state: Arc::new(Mutex::new(MonitorState::new())),
            worker: Mutex::new(None),
        })
    }

    /// Begin polling. The first tick fires immediately, then every `interval`.
    /// Errors if a session is already running.
    pub async fn start(&self, interval: Duration) -> Result<()> {
        let mut worker_guard = self.worker.lock().await;
        if worker_guard.is_some() {
            bail!("monitoring already active");
        }

        let session_id = Uuid::new_v4().to_string();
        {
            let mut state = self.state.lock().await;
            state.begin_session(session_id.clone(), interval.as_millis() as u64, Utc::now());
        }

        let mut config = self.config.clone();
        config.poll_interval = interval;

        let cancel_token = CancellationToken::new();
        let poll_worker = PollWorker {
            session_id: session_id.clone(),
            config,
            source: ReadingSource::new(self.api.clone()),
            api: self.api.clone(),
            vitals: Arc::clone(&self.vitals),
            alerts: self.alerts.clone(),
            state: Arc::clone(&self.state),
        };

        let handle = tokio::spawn(poll_loop(poll_worker, cancel_token.clone()));
        *worker_guard = Some(Worker {
            handle,
            cancel_token,
        });

        info!("monitoring session {session_id} started");
        Ok(())
    }

    /// Stop polling. Idempotent: stopping an idle monitor is a no-op. A tick
    /// already in flight runs to completion and is applied before the loop
    /// task is joined, so no state mutation happens after this returns.
    pub async fn stop(&self) -> Result<()> {
        let worker = self.worker.lock().await.take();
        let Some(Worker {
            handle,
            cancel_token,
        }) = worker
        else {
            return Ok(());
        };

        cancel_token.cancel();
        handle.await.context("poll loop task failed to join")?;

        let mut state = self.state.lock().await;
        state.stop();
        if let Some(session_id) = &state.session_id {
            info!("monitoring session {session_id} stopped after {} tick(s)", state.tick_count);
        }

        Ok(())
    }

    pub async fn is_running(&self) -> bool {
        self.worker.lock().await.is_some()
    }

    /// Current vitals snapshot for display.
    pub async fn vitals(&self) -> VitalsState {
        self.vitals.lock().await.clone()
    }

    /// Newest-first alert feed snapshot.
    pub async fn alerts(&self) -> Vec<AlertDescriptor> {
        self.alerts.snapshot().await
    }

    /// Session bookkeeping snapshot.
    pub async fn state(&self) -> MonitorState {
        self.state.lock().await.clone()
    }

    /// The backend client, for collaborator passthrough (recommendations).
    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::state::MonitorStatus;
    use tokio::time::sleep;

    // Backend deliberately unreachable: every tick exercises the simulated
    // fallback without touching the network for long.
    fn test_config() -> MonitorConfig {
        MonitorConfig {
            base_url: "http://127.0.0.1:1/api".into(),
            poll_interval: Duration::from_millis(25),
            fetch_timeout: Duration::from_millis(200),
            predict_every_ticks: 0,
        }
    }

    #[tokio::test]
    async fn first_tick_fires_immediately() {
        let monitor = VitalsMonitor::new(test_config()).unwrap();
        monitor.start(Duration::from_millis(25)).await.unwrap();

        sleep(Duration::from_millis(60)).await;
        let state = monitor.state().await;
        assert!(state.tick_count >= 1, "expected at least one tick, got {}", state.tick_count);
        assert_eq!(state.status, MonitorStatus::Running);
        assert!(state.session_id.is_some());

        monitor.stop().await.unwrap();
    }

    #[tokio::test]
    async fn ticks_overwrite_vitals_wholesale() {
        let monitor = VitalsMonitor::new(test_config()).unwrap();
        let before = monitor.vitals().await;

        monitor.start(Duration::from_millis(25)).await.unwrap();
        sleep(Duration::from_millis(100)).await;
        monitor.stop().await.unwrap();

        let after = monitor.vitals().await;
        assert!(after.updated_at > before.updated_at);
        // Simulated readings stay in range, so the displayed vitals do too.
        assert!((60..=99).contains(&after.heart_rate));
        assert!((92..=99).contains(&after.blood_oxygen));
    }

    #[tokio::test]
    async fn stop_halts_all_mutation() {
        let monitor = VitalsMonitor::new(test_config()).unwrap();
        monitor.start(Duration::from_millis(25)).await.unwrap();
        sleep(Duration::from_millis(80)).await;
        monitor.stop().await.unwrap();

        let state_then = monitor.state().await;
        let vitals_then = monitor.vitals().await;

        // Wait well past several intervals; nothing should move.
        sleep(Duration::from_millis(120)).await;

        let state_now = monitor.state().await;
        let vitals_now = monitor.vitals().await;
        assert_eq!(state_now.tick_count, state_then.tick_count);
        assert_eq!(vitals_now.updated_at, vitals_then.updated_at);
        assert_eq!(state_now.status, MonitorStatus::Idle);
    }

    #[tokio::test]
    async fn stop_is_idempotent() {
        let monitor = VitalsMonitor::new(test_config()).unwrap();

        // Stop before start is a no-op.
        monitor.stop().await.unwrap();
        assert!(!monitor.is_running().await);

        monitor.start(Duration::from_millis(25)).await.unwrap();
        assert!(monitor.is_running().await);

        monitor.stop().await.unwrap();
        monitor.stop().await.unwrap();
        assert!(!monitor.is_running().await);
    }

    #[tokio::test]
    async fn start_while_running_errors() {
        let monitor = VitalsMonitor::new(test_config()).unwrap();
        monitor.start(Duration::from_millis(25)).await.unwrap();

        let second = monitor.start(Duration::from_millis(25)).await;
        assert!(second.is_err());

        monitor.stop().await.unwrap();
    }

    #[tokio::test]
    async fn anomalous_simulated_readings_feed_the_alert_log() {
        // The simulator can emit heart rates above 95 and blood oxygen below
        // 95, so some ticks produce alerts. Check kinds, values, and the
        // capacity bound rather than exact contents.
        use crate::models::AlertKind;

        let monitor = VitalsMonitor::new(test_config()).unwrap();
        monitor.start(Duration::from_millis(5)).await.unwrap();
        sleep(Duration::from_millis(400)).await;
        monitor.stop().await.unwrap();

        let alerts = monitor.alerts().await;
        assert!(alerts.len() <= crate::alerts::MAX_ALERTS);
        for alert in &alerts {
            match alert.kind {
                AlertKind::HighHeartRate => assert!((96..=99).contains(&alert.value)),
                AlertKind::LowBloodOxygen => assert!((92..=94).contains(&alert.value)),
                AlertKind::AbnormalReading => {
                    panic!("simulator never drops below 60 bpm: {alert:?}")
                }
            }
        }
    }
}
