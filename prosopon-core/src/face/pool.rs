//! Opaque-handle face pool
//!
//! The host render loop works with small copyable ids instead of
//! references. Slots are fixed-capacity and generation-checked: `create`
//! reports exhaustion up front, and a stale id used after `destroy`
//! quietly does nothing instead of touching somebody else's face.

use heapless::Vec;

use super::Face;
use crate::time::Tick;
use crate::traits::Surface;

/// Opaque handle to a face owned by a `FacePool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceId {
    index: u8,
    generation: u8,
}

struct Slot {
    face: Face,
    generation: u8,
    live: bool,
}

/// Fixed-capacity pool of faces (one per display in practice).
pub struct FacePool<const N: usize> {
    slots: Vec<Slot, N>,
}

impl<const N: usize> FacePool<N> {
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Allocate a face. `None` means the pool is exhausted; callers must
    /// check before use.
    pub fn create(&mut self) -> Option<FaceId> {
        // Reuse a destroyed slot first, bumping its generation so any
        // handle to the old occupant goes stale.
        if let Some(index) = self.slots.iter().position(|s| !s.live) {
            let slot = &mut self.slots[index];
            slot.face = Face::new();
            slot.generation = slot.generation.wrapping_add(1);
            slot.live = true;
            return Some(FaceId {
                index: index as u8,
                generation: slot.generation,
            });
        }

        let index = self.slots.len();
        self.slots
            .push(Slot {
                face: Face::new(),
                generation: 0,
                live: true,
            })
            .ok()?;
        Some(FaceId {
            index: index as u8,
            generation: 0,
        })
    }

    /// Release a face. Stale or foreign ids are ignored.
    pub fn destroy(&mut self, id: FaceId) {
        if let Some(index) = self.check(id) {
            self.slots[index].live = false;
        }
    }

    /// Reset a face to its initial state, seeding randomness from `now`.
    pub fn init(&mut self, id: FaceId, now: Tick) {
        if let Some(index) = self.check(id) {
            self.slots[index].face.init(now);
        }
    }

    /// Advance a face's animation state.
    pub fn update(&mut self, id: FaceId, now: Tick) {
        if let Some(index) = self.check(id) {
            self.slots[index].face.update(now);
        }
    }

    /// Render a face to `surface`.
    pub fn draw<S: Surface>(&self, id: FaceId, surface: &mut S, now: Tick) {
        if let Some(index) = self.check(id) {
            self.slots[index].face.draw(surface, now);
        }
    }

    /// Borrow a face directly, e.g. for seeded init.
    pub fn get_mut(&mut self, id: FaceId) -> Option<&mut Face> {
        let index = self.check(id)?;
        Some(&mut self.slots[index].face)
    }

    /// Number of live faces.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.live).count()
    }

    fn check(&self, id: FaceId) -> Option<usize> {
        let slot = self.slots.get(id.index as usize)?;
        (slot.live && slot.generation == id.generation).then_some(id.index as usize)
    }
}

impl<const N: usize> Default for FacePool<N> {
    fn default() -> Self {
        Self::new()
    }
}
