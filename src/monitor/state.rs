use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MonitorStatus {
    Idle,
    Running,
}

impl Default for MonitorStatus {
    fn default() -> Self {
        MonitorStatus::Idle
    }
}

/// Bookkeeping for the current monitoring session, exposed to the display
/// layer as a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorState {
    pub status: MonitorStatus,
    pub session_id: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub poll_interval_ms: u64,
    pub tick_count: u64,
    pub last_tick_at: Option<DateTime<Utc>>,
}

impl Default for MonitorState {
    fn default() -> Self {
        Self {
            status: MonitorStatus::Idle,
            session_id: None,
            started_at: None,
            poll_interval_ms: 0,
            tick_count: 0,
            last_tick_at: None,
        }
    }
}

impl MonitorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_session(
        &mut self,
        session_id: String,
        poll_interval_ms: u64,
        started_at: DateTime<Utc>,
    ) {
        *self = Self {
            status: MonitorStatus::Running,
            session_id: Some(session_id),
            started_at: Some(started_at),
            poll_interval_ms,
            tick_count: 0,
            last_tick_at: None,
        };
    }

    /// Returns the tick count after recording.
    pub fn record_tick(&mut self, at: DateTime<Utc>) -> u64 {
        self.tick_count += 1;
        self.last_tick_at = Some(at);
        self.tick_count
    }

    /// Marks the session idle; counters stay readable until the next start.
    pub fn stop(&mut self) {
        self.status = MonitorStatus::Idle;
    }
}
