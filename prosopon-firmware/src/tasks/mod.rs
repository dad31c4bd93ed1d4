//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod face;
pub mod led;
pub mod sensor;

pub use face::face_task;
pub use led::led_task;
pub use sensor::sensor_task;
