//! Face animation controller
//!
//! A face is a state machine over three mutually exclusive animation
//! variants: resting eyes, a sideways glance, and a blink overlay that can
//! interrupt either of the others and must hand control back afterwards.
//! The host drives it once per rendered frame with `update(now)` followed
//! by `draw(surface, now)` against a millisecond tick.
//!
//! Transition protocol: when the blink preempts a variant, that variant is
//! paused (its elapsed clock frozen) and recorded as the blink's return
//! target; when the blink completes, the variant is resumed, not
//! restarted, so a glance continues as if no time passed while the eyes
//! were shut.

mod blink;
mod look;
mod normal;
mod pool;
mod timeline;

pub use blink::{Blink, BlinkPhase};
pub use look::Look;
pub use normal::NormalEyes;
pub use pool::{FaceId, FacePool};

use crate::rng::TickRng;
use crate::time::Tick;
use crate::traits::Surface;

/// Display geometry (128x64 OLED)
pub const SCREEN_WIDTH: i32 = 128;
pub const EYE_CENTER_Y: i32 = 32;
/// Distance of each eye center from the screen center
pub const EYE_SPACING_X: i32 = 28;
pub const EYE_WIDTH: u32 = 14;
pub const EYE_HEIGHT: u32 = 30;
pub const EYE_CORNER_RADIUS: u32 = 4;
/// Horizontal displacement of a full glance, in pixels
pub const LOOK_OFFSET_X: i32 = 10;

/// Glance ramp duration, to target and back to center
pub const LOOK_TRANSITION_MS: Tick = 120;
/// Blink closing/opening edge duration
pub const BLINK_EDGE_MS: Tick = 100;
/// Fully-closed hold inside a blink
pub const BLINK_CLOSED_MS: Tick = 60;
pub const BLINK_INTERVAL_MIN_MS: Tick = 4_000;
pub const BLINK_INTERVAL_MAX_MS: Tick = 8_000;
pub const LOOK_INTERVAL_MIN_MS: Tick = 6_000;
pub const LOOK_INTERVAL_MAX_MS: Tick = 15_000;
pub const LOOK_HOLD_MIN_MS: Tick = 1_000;
pub const LOOK_HOLD_MAX_MS: Tick = 5_000;

/// Identity tag for the three owned animation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationKind {
    Normal,
    Blink,
    Look,
}

/// Scheduling state shared between the controller and its variants.
///
/// Passed explicitly into `update` calls instead of living behind a stored
/// back-pointer.
pub struct FaceShared {
    /// Absolute tick of the next scheduled blink
    pub next_blink_time: Tick,
    /// Interval/direction source, seeded at init
    pub rng: TickRng,
}

impl FaceShared {
    const fn new() -> Self {
        Self {
            next_blink_time: 0,
            rng: TickRng::new(),
        }
    }

    /// Schedule the next blink a random interval after `now`.
    pub fn schedule_blink(&mut self, now: Tick) {
        let interval = self
            .rng
            .range_inclusive(BLINK_INTERVAL_MIN_MS, BLINK_INTERVAL_MAX_MS);
        self.next_blink_time = now.wrapping_add(interval);
    }
}

/// Computed per-frame eye geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EyeFrame {
    /// Current eye height in pixels (0 = fully closed)
    pub eye_height: u32,
    /// Signed horizontal glance offset applied to both eyes
    pub offset_x: i32,
}

/// The face controller.
///
/// Owns exactly one instance of each variant (created once, never
/// reallocated) and dispatches update/draw to whichever is current.
pub struct Face {
    normal: NormalEyes,
    blink: Blink,
    look: Look,
    current: AnimationKind,
    shared: FaceShared,
}

impl Face {
    /// Create a face in the resting state. Call `init` before driving it.
    pub const fn new() -> Self {
        Self {
            normal: NormalEyes::new(),
            blink: Blink::new(),
            look: Look::new(),
            current: AnimationKind::Normal,
            shared: FaceShared::new(),
        }
    }

    /// Reset to resting eyes, seed the interval source from the current
    /// tick, and schedule the first blink.
    pub fn init(&mut self, now: Tick) {
        self.init_seeded(now, now);
    }

    /// `init` with an explicit seed, for deterministic sequences.
    pub fn init_seeded(&mut self, now: Tick, seed: u32) {
        self.shared.rng.reseed(seed);
        self.current = AnimationKind::Normal;
        self.shared.schedule_blink(now);
        self.normal.start(now, &mut self.shared);
    }

    /// Which variant currently drives the eyes.
    pub fn current(&self) -> AnimationKind {
        self.current
    }

    /// Tick of the next scheduled blink.
    pub fn next_blink_time(&self) -> Tick {
        self.shared.next_blink_time
    }

    /// Advance the current variant and perform any transition it requests.
    pub fn update(&mut self, now: Tick) {
        let next = match self.current {
            AnimationKind::Normal => self.normal.update(now, &mut self.shared, &mut self.look),
            AnimationKind::Blink => self.blink.update(now, &mut self.shared),
            AnimationKind::Look => self.look.update(now, &mut self.shared),
        };
        if next == self.current {
            return;
        }

        let previous = self.current;
        self.current = next;

        if next == AnimationKind::Blink {
            // Freeze the interrupted variant and remember where to hand
            // control back.
            self.pause_variant(previous, now);
            self.blink.set_return_target(previous);
            self.blink.start(now);
        } else if previous == AnimationKind::Blink {
            // Blink finished: the guarded variant continues where it left
            // off.
            self.resume_variant(next, now);
        } else {
            self.start_variant(next, now);
        }
    }

    /// Render the current frame. Never mutates animation state.
    pub fn draw<S: Surface>(&self, surface: &mut S, now: Tick) {
        draw_eyes(surface, self.frame(now));
    }

    /// Geometry for the current frame.
    pub fn frame(&self, now: Tick) -> EyeFrame {
        match self.current {
            AnimationKind::Normal => EyeFrame {
                eye_height: EYE_HEIGHT,
                offset_x: self.normal.offset_x(),
            },
            AnimationKind::Look => EyeFrame {
                eye_height: EYE_HEIGHT,
                offset_x: self.look.offset_x(now),
            },
            AnimationKind::Blink => EyeFrame {
                eye_height: self.blink.eye_height(now),
                offset_x: self.offset_of(self.blink.return_target(), now),
            },
        }
    }

    /// Horizontal offset a given variant would draw with right now.
    pub fn offset_of(&self, kind: AnimationKind, now: Tick) -> i32 {
        // A blink delegates to whatever it interrupted.
        let kind = match kind {
            AnimationKind::Blink => self.blink.return_target(),
            other => other,
        };
        match kind {
            AnimationKind::Look => self.look.offset_x(now),
            _ => self.normal.offset_x(),
        }
    }

    fn pause_variant(&mut self, kind: AnimationKind, now: Tick) {
        match kind {
            AnimationKind::Normal => self.normal.pause(now),
            AnimationKind::Blink => self.blink.pause(now),
            AnimationKind::Look => self.look.pause(now),
        }
    }

    fn resume_variant(&mut self, kind: AnimationKind, now: Tick) {
        match kind {
            AnimationKind::Normal => self.normal.resume(now),
            AnimationKind::Blink => self.blink.resume(now),
            AnimationKind::Look => self.look.resume(now),
        }
    }

    fn start_variant(&mut self, kind: AnimationKind, now: Tick) {
        match kind {
            AnimationKind::Normal => self.normal.start(now, &mut self.shared),
            AnimationKind::Blink => self.blink.start(now),
            AnimationKind::Look => self.look.start(now, &mut self.shared),
        }
    }
}

impl Default for Face {
    fn default() -> Self {
        Self::new()
    }
}

/// Render both eyes: rounded boxes when open, flat lines when nearly shut.
fn draw_eyes<S: Surface>(surface: &mut S, frame: EyeFrame) {
    let center_x = SCREEN_WIDTH / 2;
    let left_cx = center_x - EYE_SPACING_X + frame.offset_x;
    let right_cx = center_x + EYE_SPACING_X + frame.offset_x;
    let half_w = EYE_WIDTH as i32 / 2;

    if frame.eye_height <= 2 {
        surface.hline(left_cx - half_w, EYE_CENTER_Y, EYE_WIDTH);
        surface.hline(right_cx - half_w, EYE_CENTER_Y, EYE_WIDTH);
    } else {
        let top_y = EYE_CENTER_Y - frame.eye_height as i32 / 2;
        surface.fill_rounded_rect(
            left_cx - half_w,
            top_y,
            EYE_WIDTH,
            frame.eye_height,
            EYE_CORNER_RADIUS,
        );
        surface.fill_rounded_rect(
            right_cx - half_w,
            top_y,
            EYE_WIDTH,
            frame.eye_height,
            EYE_CORNER_RADIUS,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    /// Surface that records primitive calls instead of rasterizing.
    #[derive(Default)]
    struct RecordingSurface {
        rects: Vec<(i32, i32, u32, u32, u32)>,
        hlines: Vec<(i32, i32, u32)>,
    }

    impl Surface for RecordingSurface {
        fn fill_rounded_rect(&mut self, x: i32, y: i32, width: u32, height: u32, radius: u32) {
            self.rects.push((x, y, width, height, radius));
        }

        fn hline(&mut self, x: i32, y: i32, len: u32) {
            self.hlines.push((x, y, len));
        }
    }

    fn init_face(now: Tick) -> Face {
        let mut face = Face::new();
        face.init_seeded(now, 0xC0FFEE);
        face
    }

    /// Put the face into a running glance without waiting out the random
    /// look interval.
    fn force_look(face: &mut Face, now: Tick, target: i32) {
        face.look.set_target(0, target);
        face.look.start(now, &mut face.shared);
        face.current = AnimationKind::Look;
    }

    fn run_blink_to_completion(face: &mut Face, start: Tick) -> Tick {
        let mut now = start;
        assert_eq!(face.current(), AnimationKind::Blink);
        while face.current() == AnimationKind::Blink {
            now += 20;
            face.update(now);
        }
        now
    }

    #[test]
    fn test_init_selects_normal_and_schedules_blink() {
        let face = init_face(1000);
        assert_eq!(face.current(), AnimationKind::Normal);
        let interval = face.next_blink_time() - 1000;
        assert!((BLINK_INTERVAL_MIN_MS..=BLINK_INTERVAL_MAX_MS).contains(&interval));
    }

    #[test]
    fn test_blink_fires_at_deadline_from_normal() {
        let mut face = init_face(0);
        // Pin the deadline well before any glance can be due.
        face.shared.next_blink_time = 1000;

        face.update(999);
        assert_eq!(face.current(), AnimationKind::Normal);

        face.update(1000);
        assert_eq!(face.current(), AnimationKind::Blink);
        assert_eq!(face.blink.return_target(), AnimationKind::Normal);
    }

    #[test]
    fn test_blink_fires_at_deadline_from_look() {
        let mut face = init_face(0);
        force_look(&mut face, 10, 10);
        face.shared.next_blink_time = 40;

        face.update(40);
        assert_eq!(face.current(), AnimationKind::Blink);
        assert_eq!(face.blink.return_target(), AnimationKind::Look);
    }

    #[test]
    fn test_blink_completion_reschedules_and_returns() {
        let mut face = init_face(0);
        face.shared.next_blink_time = 1000;
        face.update(1000);

        let done = run_blink_to_completion(&mut face, 1000);
        assert_eq!(face.current(), AnimationKind::Normal);
        assert!(face.next_blink_time() > done);
    }

    #[test]
    fn test_blink_preserves_look_offset() {
        let mut face = init_face(0);
        let t0 = 100;
        force_look(&mut face, t0, 10);

        // Interrupt mid-transition.
        let mid = t0 + 60;
        let offset_before = face.offset_of(AnimationKind::Look, mid);
        assert!(offset_before > 0 && offset_before < 10);

        face.shared.next_blink_time = mid;
        face.update(mid);
        assert_eq!(face.current(), AnimationKind::Blink);

        // The frozen glance offset shows through the whole blink.
        let during = face.frame(mid + BLINK_EDGE_MS / 2);
        assert_eq!(during.offset_x, offset_before);
        assert!(during.eye_height < EYE_HEIGHT);

        let done = run_blink_to_completion(&mut face, mid);
        assert_eq!(face.current(), AnimationKind::Look);

        // Resumed, not restarted: the glance picks up at its original
        // progress.
        assert_eq!(face.offset_of(AnimationKind::Look, done), offset_before);
    }

    #[test]
    fn test_pause_roundtrip_excises_blink_time() {
        let mut face = init_face(0);
        let t0 = 100;
        force_look(&mut face, t0, 10);

        face.shared.next_blink_time = t0 + 60;
        face.update(t0 + 60);
        let done = run_blink_to_completion(&mut face, t0 + 60);

        // 60 ms of glance progress before the blink; the transition
        // completes 60 ms after the hand-back regardless of how long the
        // blink took.
        assert_eq!(
            face.offset_of(AnimationKind::Look, done + (LOOK_TRANSITION_MS - 60)),
            10
        );
    }

    #[test]
    fn test_look_returns_to_normal() {
        let mut face = init_face(0);
        force_look(&mut face, 0, -10);
        // Keep the blink out of the way for this scenario.
        face.shared.next_blink_time = u32::MAX / 2;

        let done = face.look.hold_end() + LOOK_TRANSITION_MS;
        face.update(done - 1);
        assert_eq!(face.current(), AnimationKind::Look);
        face.update(done);
        assert_eq!(face.current(), AnimationKind::Normal);
    }

    #[test]
    fn test_long_run_stays_in_variant_set() {
        let mut face = init_face(0);
        let mut saw_blink = false;
        let mut saw_look = false;

        let mut now = 0u32;
        for _ in 0..4000 {
            now += 50;
            face.update(now);
            match face.current() {
                AnimationKind::Blink => saw_blink = true,
                AnimationKind::Look => saw_look = true,
                AnimationKind::Normal => {}
            }
        }
        // 200 simulated seconds: both interrupt paths must have fired.
        assert!(saw_blink);
        assert!(saw_look);
    }

    #[test]
    fn test_update_across_tick_wraparound() {
        let start = u32::MAX - 2_000;
        let mut face = Face::new();
        face.init_seeded(start, 0xC0FFEE);

        let mut now = start;
        let mut saw_blink = false;
        for _ in 0..1200 {
            now = now.wrapping_add(50);
            face.update(now);
            if face.current() == AnimationKind::Blink {
                saw_blink = true;
            }
        }
        // The counter wrapped during this run and blinks kept firing.
        assert!(now < start);
        assert!(saw_blink);
    }

    #[test]
    fn test_draw_open_eyes_as_rounded_boxes() {
        let face = init_face(0);
        let mut surface = RecordingSurface::default();
        face.draw(&mut surface, 0);

        assert!(surface.hlines.is_empty());
        assert_eq!(surface.rects.len(), 2);

        let top_y = EYE_CENTER_Y - EYE_HEIGHT as i32 / 2;
        let half_w = EYE_WIDTH as i32 / 2;
        assert_eq!(
            surface.rects[0],
            (
                SCREEN_WIDTH / 2 - EYE_SPACING_X - half_w,
                top_y,
                EYE_WIDTH,
                EYE_HEIGHT,
                EYE_CORNER_RADIUS
            )
        );
        assert_eq!(
            surface.rects[1],
            (
                SCREEN_WIDTH / 2 + EYE_SPACING_X - half_w,
                top_y,
                EYE_WIDTH,
                EYE_HEIGHT,
                EYE_CORNER_RADIUS
            )
        );
    }

    #[test]
    fn test_draw_closed_eyes_as_lines() {
        let mut surface = RecordingSurface::default();
        draw_eyes(
            &mut surface,
            EyeFrame {
                eye_height: 0,
                offset_x: 3,
            },
        );

        assert!(surface.rects.is_empty());
        assert_eq!(surface.hlines.len(), 2);
        let half_w = EYE_WIDTH as i32 / 2;
        assert_eq!(
            surface.hlines[0],
            (SCREEN_WIDTH / 2 - EYE_SPACING_X + 3 - half_w, EYE_CENTER_Y, EYE_WIDTH)
        );
    }

    #[test]
    fn test_draw_does_not_mutate_state() {
        let mut face = init_face(0);
        force_look(&mut face, 0, 10);
        let mut surface = RecordingSurface::default();

        let before = face.frame(60);
        face.draw(&mut surface, 60);
        face.draw(&mut surface, 60);
        assert_eq!(face.frame(60), before);
        assert_eq!(face.current(), AnimationKind::Look);
    }
}
