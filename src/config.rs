use std::time::Duration;

/// Tunables for a monitoring session.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Base URL of the backend API, e.g. `http://localhost:5000/api`
    pub base_url: String,

    /// Delay between polls
    pub poll_interval: Duration,

    /// Bound on a single remote call before falling back to simulated data
    pub fetch_timeout: Duration,

    /// Fire the prediction collaborator every this many ticks (0 disables it)
    pub predict_every_ticks: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".into(),
            poll_interval: Duration::from_secs(5),
            fetch_timeout: Duration::from_secs(2),
            predict_every_ticks: 6,
        }
    }
}

impl MonitorConfig {
    /// Defaults overridden by `VITALWATCH_*` environment variables where set.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("VITALWATCH_API_URL") {
            config.base_url = url;
        }
        if let Some(ms) = env_ms("VITALWATCH_POLL_INTERVAL_MS") {
            config.poll_interval = Duration::from_millis(ms);
        }
        if let Some(ms) = env_ms("VITALWATCH_FETCH_TIMEOUT_MS") {
            config.fetch_timeout = Duration::from_millis(ms);
        }

        config
    }
}

fn env_ms(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|value| value.parse().ok())
}
