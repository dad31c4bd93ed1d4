//! Sideways glance
//!
//! Three phases computed purely from elapsed time inside `offset_x`: ease
//! to the target offset, hold there, ease back to center. The hold
//! deadline lives in the elapsed domain, so `update` and `offset_x` share
//! the identical window and a pause (blink interrupt) freezes the whole
//! profile coherently.

use super::timeline::Timeline;
use super::{
    AnimationKind, FaceShared, LOOK_HOLD_MAX_MS, LOOK_HOLD_MIN_MS, LOOK_TRANSITION_MS,
};
use crate::easing;
use crate::time::{self, Tick};

pub struct Look {
    timeline: Timeline,
    /// Elapsed-domain end of the hold phase (transition + random hold)
    hold_end: Tick,
    start_offset_x: i32,
    target_offset_x: i32,
}

impl Look {
    pub const fn new() -> Self {
        Self {
            timeline: Timeline::new(),
            hold_end: 0,
            start_offset_x: 0,
            target_offset_x: 0,
        }
    }

    /// Set by whoever schedules the glance, before `start`.
    pub fn set_target(&mut self, start_offset_x: i32, target_offset_x: i32) {
        self.start_offset_x = start_offset_x;
        self.target_offset_x = target_offset_x;
    }

    pub fn target_offset_x(&self) -> i32 {
        self.target_offset_x
    }

    pub(crate) fn hold_end(&self) -> Tick {
        self.hold_end
    }

    pub fn start(&mut self, now: Tick, shared: &mut FaceShared) {
        self.timeline.restart(now);
        let hold = shared.rng.range_inclusive(LOOK_HOLD_MIN_MS, LOOK_HOLD_MAX_MS);
        self.hold_end = LOOK_TRANSITION_MS + hold;
    }

    pub fn update(&mut self, now: Tick, shared: &mut FaceShared) -> AnimationKind {
        if time::reached(now, shared.next_blink_time) {
            return AnimationKind::Blink;
        }
        // Same window `offset_x` uses: once the return ramp has finished,
        // hand back to resting eyes.
        if self.timeline.elapsed(now) >= self.hold_end + LOOK_TRANSITION_MS {
            return AnimationKind::Normal;
        }
        AnimationKind::Look
    }

    /// Current horizontal offset, a pure function of elapsed time.
    pub fn offset_x(&self, now: Tick) -> i32 {
        let elapsed = self.timeline.elapsed(now);

        // Transition to target
        if elapsed <= LOOK_TRANSITION_MS {
            let eased = easing::ease_out(elapsed, LOOK_TRANSITION_MS);
            return easing::lerp_i32(self.start_offset_x, self.target_offset_x, eased);
        }
        // Hold at target
        if elapsed <= self.hold_end {
            return self.target_offset_x;
        }
        // Transition back to center
        let back = elapsed - self.hold_end;
        if back <= LOOK_TRANSITION_MS {
            let eased = easing::ease_out(back, LOOK_TRANSITION_MS);
            return easing::lerp_i32(self.target_offset_x, 0, eased);
        }

        0
    }

    pub fn pause(&mut self, now: Tick) {
        self.timeline.pause(now);
    }

    pub fn resume(&mut self, now: Tick) {
        self.timeline.resume(now);
    }
}
