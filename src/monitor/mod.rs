mod loop_worker;

pub mod controller;
pub mod state;

pub use controller::VitalsMonitor;
pub use state::{MonitorState, MonitorStatus};
