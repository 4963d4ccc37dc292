//! LRU (Least Recently Used) replacement policy.

use std::collections::HashSet;

use log::warn;

use crate::common::{FrameId, PageId};
use crate::error::InvariantError;
use crate::sim::FrameSet;

/// LRU eviction state.
///
/// Keeps every resident page in a recency list, least-recent first. With
/// at most eight frames a `Vec` scan beats any linked structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LruReplacer {
    /// Resident pages ordered from least to most recently referenced.
    recency: Vec<PageId>,
}

impl LruReplacer {
    /// Create an LRU replacer with an empty recency list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pages in recency order, least-recent first.
    pub fn recency(&self) -> &[PageId] {
        &self.recency
    }

    /// Record a reference to `page`, making it the most recently used.
    ///
    /// Called for both hits and faults.
    pub fn record_access(&mut self, page: PageId) {
        if let Some(pos) = self.recency.iter().position(|&p| p == page) {
            self.recency.remove(pos);
        }
        self.recency.push(page);
    }

    /// Select the least recently used resident page and drop it from the
    /// recency list.
    ///
    /// Only called when every frame is occupied.
    pub fn evict(&mut self, frames: &FrameSet) -> FrameId {
        let victim = self
            .recency
            .iter()
            .enumerate()
            .find_map(|(i, &page)| frames.position(page).map(|slot| (i, slot)));

        match victim {
            Some((i, slot)) => {
                self.recency.remove(i);
                slot
            }
            None => {
                // Recency list lost track of the residents; check_invariants
                // reports this. Fall back to the first slot.
                warn!("LRU recency list holds no resident page, evicting slot 0");
                FrameId::new(0)
            }
        }
    }

    pub(crate) fn check_invariants(&self, frames: &FrameSet) -> Result<(), InvariantError> {
        let mut seen = HashSet::with_capacity(self.recency.len());
        for &page in &self.recency {
            if !seen.insert(page) {
                return Err(InvariantError::new(format!(
                    "LRU recency list has duplicate page {}",
                    page
                )));
            }
            if !frames.contains(page) {
                return Err(InvariantError::new(format!(
                    "LRU recency list has non-resident page {}",
                    page
                )));
            }
        }
        if let Some((_, page)) = frames.resident().find(|(_, page)| !seen.contains(page)) {
            return Err(InvariantError::new(format!(
                "resident page {} missing from LRU recency list",
                page
            )));
        }
        Ok(())
    }
}
