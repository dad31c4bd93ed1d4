//! Board-agnostic animation engine for the Prosopon desk companion
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - The face controller and its three animation variants
//!   (resting eyes, glance, blink)
//! - Quarter-sine easing utilities
//! - The opaque-handle face pool used by the host render loop
//! - Hardware abstraction traits (drawing surface, climate sensor types)
//! - Millisecond tick arithmetic and the interval PRNG

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod easing;
pub mod face;
pub mod rng;
pub mod time;
pub mod traits;
