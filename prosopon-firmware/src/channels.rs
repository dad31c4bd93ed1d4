//! Inter-task communication
//!
//! Uses embassy-sync primitives. A `Signal` holds only the most recent
//! value; consumers always see the latest climate sample.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use prosopon_core::traits::sensor::ClimateReading;

/// Latest climate sample, `None` while the sensor is faulted.
pub static CLIMATE_READING: Signal<CriticalSectionRawMutex, Option<ClimateReading>> = Signal::new();
