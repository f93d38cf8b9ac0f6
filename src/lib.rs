pub mod alerts;
pub mod classifier;
pub mod config;
pub mod models;
pub mod monitor;
pub mod source;

pub use alerts::AlertLog;
pub use config::MonitorConfig;
pub use models::{ActivityLevel, AlertDescriptor, AlertKind, Reading, VitalsState, VitalsStatus};
pub use monitor::{MonitorState, MonitorStatus, VitalsMonitor};
pub use source::{ApiClient, ReadingSource};
