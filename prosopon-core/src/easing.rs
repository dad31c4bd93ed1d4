//! Quarter-sine easing
//!
//! Transitions are shaped with one quarter period of a sine wave. A
//! 32-entry lookup table scaled to 0-255 keeps floating point and
//! trigonometry out of the render path; the table index is selected
//! linearly from the progress fraction.
//!
//! All functions are total: a zero duration or an elapsed time past the
//! duration clamps to the completed end of the curve.

use crate::time::Tick;

/// Full scale of an eased fraction (the table maps progress onto 0..=255).
pub const EASE_SCALE: u32 = 255;

/// sin(i / 31 * pi/2) * 255, rounded, for i in 0..=31.
const QUARTER_SINE: [u8; 32] = [
    0, 13, 26, 39, 51, 64, 76, 89, 101, 112, 124, 135, 146, 156, 166, 176,
    185, 193, 202, 209, 216, 223, 229, 234, 239, 243, 247, 250, 252, 254,
    255, 255,
];

/// Table index for an in-progress transition, `None` once completed.
#[inline]
fn table_index(elapsed: Tick, duration: Tick) -> Option<usize> {
    if duration == 0 || elapsed >= duration {
        return None;
    }
    Some((elapsed as u64 * (QUARTER_SINE.len() as u64 - 1) / duration as u64) as usize)
}

/// Ease-out sine: fast start, gentle arrival.
///
/// 0 at `elapsed == 0`, 255 once `elapsed >= duration`, monotone in between.
pub fn ease_out(elapsed: Tick, duration: Tick) -> u8 {
    match table_index(elapsed, duration) {
        Some(i) => QUARTER_SINE[i],
        None => 255,
    }
}

/// Ease-in sine: gentle start, fast arrival.
pub fn ease_in(elapsed: Tick, duration: Tick) -> u8 {
    match table_index(elapsed, duration) {
        Some(i) => 255 - QUARTER_SINE[QUARTER_SINE.len() - 1 - i],
        None => 255,
    }
}

/// Falling cosine edge: 255 at `elapsed == 0` down to 0 once
/// `elapsed >= duration`. Shapes the closing half of a blink.
pub fn fall(elapsed: Tick, duration: Tick) -> u8 {
    match table_index(elapsed, duration) {
        Some(i) => QUARTER_SINE[QUARTER_SINE.len() - 1 - i],
        None => 0,
    }
}

/// Interpolate between two signed offsets by an eased fraction.
pub fn lerp_i32(from: i32, to: i32, eased: u8) -> i32 {
    from + (to - from) * eased as i32 / EASE_SCALE as i32
}

/// Scale an unsigned magnitude by an eased fraction.
pub fn scale_u32(value: u32, eased: u8) -> u32 {
    value * eased as u32 / EASE_SCALE
}
