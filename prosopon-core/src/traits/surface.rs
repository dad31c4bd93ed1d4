//! Drawing surface trait
//!
//! The engine computes eye geometry only; pixel work happens behind this
//! trait. Operations are infallible: a surface is a memory buffer, and
//! transport errors belong to whoever flushes it to the panel.

/// Minimal primitive set needed to render the face.
///
/// Coordinates may fall partly or fully outside the surface (a glance
/// offset can push an eye past the edge); implementations clip instead of
/// rejecting.
pub trait Surface {
    /// Fill a rectangle with rounded corners.
    fn fill_rounded_rect(&mut self, x: i32, y: i32, width: u32, height: u32, radius: u32);

    /// Draw a 1-px horizontal line starting at (x, y).
    fn hline(&mut self, x: i32, y: i32, len: u32);
}
