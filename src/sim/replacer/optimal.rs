//! Optimal (Belady) replacement policy.
//!
//! Looks ahead into the references that have not been processed yet and
//! evicts the resident page needed furthest in the future. Only possible
//! offline, which is exactly what a simulator has.

use crate::common::{FrameId, PageId};
use crate::sim::FrameSet;

/// Optimal eviction. Stateless: every decision is recomputed from the
/// upcoming references.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    pub fn new() -> Self {
        OptimalReplacer
    }

    /// Select the victim slot for a full frame set.
    ///
    /// Slots are scanned in index order. The first resident page that never
    /// appears in `upcoming` is evicted immediately. Otherwise the page whose
    /// next use is strictly furthest away wins, and ties keep the slot seen
    /// first.
    pub fn victim(&self, frames: &FrameSet, upcoming: &[PageId]) -> FrameId {
        let mut victim = FrameId::new(0);
        let mut farthest: Option<usize> = None;

        for (slot, page) in frames.resident() {
            match next_use(page, upcoming) {
                None => return slot,
                Some(next) => {
                    let further = match farthest {
                        Some(best) => next > best,
                        None => true,
                    };
                    if further {
                        victim = slot;
                        farthest = Some(next);
                    }
                }
            }
        }

        victim
    }

    /// Distance to the next use of each slot's page, `None` for empty slots
    /// and for pages never used again.
    ///
    /// This is the lookahead a step view shows next to the frames.
    pub fn next_uses(&self, frames: &FrameSet, upcoming: &[PageId]) -> Vec<Option<usize>> {
        frames
            .iter()
            .map(|slot| slot.and_then(|page| next_use(page, upcoming)))
            .collect()
    }
}

fn next_use(page: PageId, upcoming: &[PageId]) -> Option<usize> {
    upcoming.iter().position(|&p| p == page)
}
