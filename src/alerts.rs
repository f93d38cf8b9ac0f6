use std::sync::Arc;
use tokio::sync::Mutex;

use crate::models::AlertDescriptor;

/// The alert feed shows at most this many entries; older ones are evicted.
pub const MAX_ALERTS: usize = 10;

/// Bounded, newest-first alert history shared between the poll loop and the
/// display layer. Writers append, readers take snapshots; there is no removal
/// beyond capacity eviction and repeated identical alerts are all recorded.
pub struct AlertLog {
    inner: Arc<Mutex<Vec<AlertDescriptor>>>,
}

impl AlertLog {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::with_capacity(MAX_ALERTS))),
        }
    }

    /// Insert at the front; drops the oldest entry once over capacity.
    pub async fn append(&self, alert: AlertDescriptor) {
        let mut entries = self.inner.lock().await;
        entries.insert(0, alert);
        entries.truncate(MAX_ALERTS);
    }

    /// Newest-first copy of the current feed.
    pub async fn snapshot(&self) -> Vec<AlertDescriptor> {
        self.inner.lock().await.clone()
    }
}

impl Default for AlertLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for AlertLog {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
