//! Display support for the Prosopon desk companion
//!
//! This crate provides:
//! - `FrameBuffer`: a 1-bpp page-organized buffer implementing the core
//!   `Surface` trait (rounded boxes, horizontal lines, clipping)
//! - `Ssd1306`: an async I2C driver that initializes the panel and
//!   flushes the frame buffer to it
//!
//! The animation engine draws into the buffer through the trait; only the
//! flush path touches the bus and can fail.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod ssd1306;

pub use frame::{FrameBuffer, HEIGHT, PAGES, WIDTH};
pub use ssd1306::Ssd1306;
