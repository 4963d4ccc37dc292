//! FIFO (First-In-First-Out) replacement policy.
//!
//! Frames fill in slot order, so the oldest page always sits in the slot
//! after the last one replaced. A single rotating pointer is therefore all
//! the state FIFO needs.

use crate::common::FrameId;
use crate::error::InvariantError;
use crate::sim::FrameSet;

/// FIFO eviction state: the next victim slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FifoReplacer {
    /// Slot evicted on the next fault once the frames are full.
    pointer: usize,

    /// Number of frames the pointer wraps around.
    frame_count: usize,
}

impl FifoReplacer {
    /// Create a FIFO replacer for `frame_count` frames.
    ///
    /// # Panics
    /// Panics if `frame_count` is 0.
    pub fn new(frame_count: usize) -> Self {
        assert!(frame_count > 0, "frame_count must be > 0");

        Self {
            pointer: 0,
            frame_count,
        }
    }

    /// The slot the pointer addresses.
    #[inline]
    pub fn pointer(&self) -> FrameId {
        FrameId::new(self.pointer)
    }

    /// Select the victim and advance the pointer past it.
    ///
    /// Only called when every frame is occupied.
    pub fn evict(&mut self) -> FrameId {
        let victim = FrameId::new(self.pointer);
        self.pointer = (self.pointer + 1) % self.frame_count;
        victim
    }

    pub(crate) fn check_invariants(&self, frames: &FrameSet) -> Result<(), InvariantError> {
        if self.frame_count != frames.len() {
            return Err(InvariantError::new(format!(
                "FIFO sized for {} frames but frame set has {}",
                self.frame_count,
                frames.len()
            )));
        }
        if self.pointer >= self.frame_count {
            return Err(InvariantError::new(format!(
                "FIFO pointer {} out of range for {} frames",
                self.pointer, self.frame_count
            )));
        }
        Ok(())
    }
}
