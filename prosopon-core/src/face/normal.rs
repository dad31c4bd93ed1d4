//! Resting eyes
//!
//! The idle variant: both eyes fully open at center. Its only job during
//! `update` is deciding when to hand off, either to the globally scheduled
//! blink or to a spontaneous glance.

use super::timeline::Timeline;
use super::{
    AnimationKind, FaceShared, Look, LOOK_INTERVAL_MAX_MS, LOOK_INTERVAL_MIN_MS, LOOK_OFFSET_X,
};
use crate::time::{self, Tick};

pub struct NormalEyes {
    timeline: Timeline,
    /// Absolute tick of the next spontaneous glance
    next_look_time: Tick,
}

impl NormalEyes {
    pub const fn new() -> Self {
        Self {
            timeline: Timeline::new(),
            next_look_time: 0,
        }
    }

    pub fn start(&mut self, now: Tick, shared: &mut FaceShared) {
        self.timeline.restart(now);
        let interval = shared
            .rng
            .range_inclusive(LOOK_INTERVAL_MIN_MS, LOOK_INTERVAL_MAX_MS);
        self.next_look_time = now.wrapping_add(interval);
    }

    /// The global blink deadline always wins; otherwise hand off to a
    /// glance once its interval expires.
    pub fn update(&mut self, now: Tick, shared: &mut FaceShared, look: &mut Look) -> AnimationKind {
        if time::reached(now, shared.next_blink_time) {
            return AnimationKind::Blink;
        }
        if time::reached(now, self.next_look_time) {
            let direction = shared.rng.direction();
            look.set_target(0, direction * LOOK_OFFSET_X);
            return AnimationKind::Look;
        }
        AnimationKind::Normal
    }

    /// Resting eyes never shift horizontally.
    pub fn offset_x(&self) -> i32 {
        0
    }

    pub fn pause(&mut self, now: Tick) {
        self.timeline.pause(now);
    }

    pub fn resume(&mut self, now: Tick) {
        self.timeline.resume(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::TickRng;

    fn shared_with_blink_at(deadline: Tick) -> FaceShared {
        FaceShared {
            next_blink_time: deadline,
            rng: TickRng::with_seed(99),
        }
    }

    #[test]
    fn test_stays_normal_before_any_deadline() {
        let mut shared = shared_with_blink_at(100_000);
        let mut normal = NormalEyes::new();
        let mut look = Look::new();
        normal.start(0, &mut shared);
        assert_eq!(
            normal.update(10, &mut shared, &mut look),
            AnimationKind::Normal
        );
    }

    #[test]
    fn test_blink_deadline_wins() {
        let mut shared = shared_with_blink_at(500);
        let mut normal = NormalEyes::new();
        let mut look = Look::new();
        normal.start(0, &mut shared);
        // Force the glance deadline to be due as well: blink still wins.
        normal.next_look_time = 400;
        assert_eq!(
            normal.update(600, &mut shared, &mut look),
            AnimationKind::Blink
        );
    }

    #[test]
    fn test_look_handoff_sets_target() {
        let mut shared = shared_with_blink_at(1_000_000);
        let mut normal = NormalEyes::new();
        let mut look = Look::new();
        normal.start(0, &mut shared);
        normal.next_look_time = 200;

        assert_eq!(
            normal.update(250, &mut shared, &mut look),
            AnimationKind::Look
        );
        assert_eq!(look.target_offset_x().abs(), LOOK_OFFSET_X);
    }

    #[test]
    fn test_glance_interval_in_configured_range() {
        let mut shared = shared_with_blink_at(u32::MAX / 2);
        let mut normal = NormalEyes::new();
        normal.start(1000, &mut shared);
        let interval = normal.next_look_time - 1000;
        assert!((LOOK_INTERVAL_MIN_MS..=LOOK_INTERVAL_MAX_MS).contains(&interval));
    }
}
