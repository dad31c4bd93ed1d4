//! Blink overlay
//!
//! Blink interrupts whichever variant is current, closes and reopens the
//! eyes, then hands control back to the variant it preempted. The
//! interrupted variant keeps supplying the horizontal offset, so a glance
//! in progress survives the blink instead of snapping back to center.

use super::timeline::Timeline;
use super::{AnimationKind, FaceShared, BLINK_CLOSED_MS, BLINK_EDGE_MS, EYE_HEIGHT};
use crate::easing;
use crate::time::Tick;

/// Sub-phases of one blink, gated by accumulated elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkPhase {
    Closing,
    Closed,
    Opening,
}

pub struct Blink {
    timeline: Timeline,
    phase: BlinkPhase,
    /// Variant to hand control back to; never Blink while a blink runs.
    return_target: AnimationKind,
}

impl Blink {
    pub const fn new() -> Self {
        Self {
            timeline: Timeline::new(),
            phase: BlinkPhase::Closing,
            return_target: AnimationKind::Normal,
        }
    }

    /// Remember which variant this blink preempted.
    pub fn set_return_target(&mut self, kind: AnimationKind) {
        // A blink can only guard one of the other two variants.
        self.return_target = if kind == AnimationKind::Blink {
            AnimationKind::Normal
        } else {
            kind
        };
    }

    pub fn return_target(&self) -> AnimationKind {
        self.return_target
    }

    pub fn phase(&self) -> BlinkPhase {
        self.phase
    }

    pub fn start(&mut self, now: Tick) {
        self.timeline.restart(now);
        self.phase = BlinkPhase::Closing;
    }

    /// Advance the sub-phase. On completing the opening edge, reschedule
    /// the next blink and hand control back.
    pub fn update(&mut self, now: Tick, shared: &mut FaceShared) -> AnimationKind {
        let elapsed = self.timeline.elapsed(now);
        match self.phase {
            BlinkPhase::Closing => {
                if elapsed > BLINK_EDGE_MS {
                    self.phase = BlinkPhase::Closed;
                }
            }
            BlinkPhase::Closed => {
                if elapsed > BLINK_EDGE_MS + BLINK_CLOSED_MS {
                    self.phase = BlinkPhase::Opening;
                }
            }
            BlinkPhase::Opening => {
                if elapsed > 2 * BLINK_EDGE_MS + BLINK_CLOSED_MS {
                    shared.schedule_blink(now);
                    return self.return_target;
                }
            }
        }
        AnimationKind::Blink
    }

    /// Eye height for the current frame: cosine fall on the closing edge,
    /// zero while closed, sine rise on the opening edge.
    pub fn eye_height(&self, now: Tick) -> u32 {
        let elapsed = self.timeline.elapsed(now);
        let eased = match self.phase {
            BlinkPhase::Closing => easing::fall(elapsed, BLINK_EDGE_MS),
            BlinkPhase::Closed => 0,
            BlinkPhase::Opening => easing::ease_out(
                elapsed.saturating_sub(BLINK_EDGE_MS + BLINK_CLOSED_MS),
                BLINK_EDGE_MS,
            ),
        };
        easing::scale_u32(EYE_HEIGHT, eased)
    }

    pub fn pause(&mut self, now: Tick) {
        self.timeline.pause(now);
    }

    pub fn resume(&mut self, now: Tick) {
        self.timeline.resume(now);
    }
}
