//! Hardware abstraction traits and boundary types
//!
//! These define the interface between the animation/application logic and
//! hardware-specific implementations.

pub mod sensor;
pub mod surface;

pub use sensor::{ClimateReading, SensorError};
pub use surface::Surface;
