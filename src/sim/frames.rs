//! FrameSet - the fixed row of memory frames.
//!
//! A [`FrameSet`] is the occupancy the replacers decide over:
//! - One slot per physical frame, addressed by [`FrameId`]
//! - Each slot holds a resident page or is empty
//! - The number of slots is fixed when the set is created

use std::fmt;

use crate::common::{FrameId, PageId};

/// The frames of a simulation run.
///
/// Slots live in a boxed slice, so there is no way to grow or shrink the set
/// after construction. Cloning is cheap (at most eight words), which is what
/// lets replacers work on copies and the history keep value snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameSet {
    slots: Box<[Option<PageId>]>,
}

impl FrameSet {
    /// Create a frame set with `count` empty slots.
    ///
    /// # Panics
    /// Panics if `count` is 0. Configuration validation rejects that long
    /// before a frame set is built.
    pub fn new(count: usize) -> Self {
        assert!(count > 0, "frame count must be > 0");

        Self {
            slots: vec![None; count].into_boxed_slice(),
        }
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; a frame set has at least one slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The page held in `slot`, or `None` if the slot is empty or out of range.
    #[inline]
    pub fn get(&self, slot: FrameId) -> Option<PageId> {
        self.slots.get(slot.0).copied().flatten()
    }

    /// Slot currently holding `page`.
    pub fn position(&self, page: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|&slot| slot == Some(page))
            .map(FrameId::new)
    }

    /// Whether `page` is resident.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.position(page).is_some()
    }

    /// Lowest-indexed empty slot.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId::new)
    }

    /// Whether every slot holds a page.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of occupied slots.
    pub fn resident_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Put `page` into `slot`, returning the page it displaced.
    ///
    /// # Panics
    /// Panics if `slot` is out of range.
    pub fn replace(&mut self, slot: FrameId, page: PageId) -> Option<PageId> {
        self.slots[slot.0].replace(page)
    }

    /// Iterate over the slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = Option<PageId>> + '_ {
        self.slots.iter().copied()
    }

    /// Iterate over `(slot, page)` for occupied slots in index order.
    pub fn resident(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|page| (FrameId::new(i), page)))
    }

    /// Raw slot view.
    #[inline]
    pub fn as_slice(&self) -> &[Option<PageId>] {
        &self.slots
    }
}

impl fmt::Display for FrameSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match slot {
                Some(page) => write!(f, "{}", page)?,
                None => write!(f, "-")?,
            }
        }
        write!(f, "]")
    }
}
