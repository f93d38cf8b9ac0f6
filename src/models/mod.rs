pub mod alert;
pub mod reading;
pub mod vitals;

pub use alert::{AlertDescriptor, AlertKind};
pub use reading::{ActivityLevel, Reading};
pub use vitals::{VitalsState, VitalsStatus};
