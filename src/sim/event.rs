//! Step events.

use std::fmt;

use crate::common::{FrameId, PageId};

/// What happened on one step of a simulation.
///
/// `Start` is the event of the initial state before any reference has been
/// processed. `Done` is emitted once, by the first forward step after the
/// last reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Nothing processed yet.
    Start,

    /// `page` was already resident in `slot`.
    Hit { page: PageId, slot: FrameId },

    /// `page` was loaded into `slot`, displacing `replaced` if the slot was
    /// occupied.
    Fault {
        page: PageId,
        replaced: Option<PageId>,
        slot: FrameId,
    },

    /// Every reference has been processed.
    Done,
}

impl Event {
    /// The page this event processed, if any.
    pub fn page(&self) -> Option<PageId> {
        match self {
            Event::Hit { page, .. } | Event::Fault { page, .. } => Some(*page),
            Event::Start | Event::Done => None,
        }
    }

    /// The slot this event touched, if any.
    pub fn slot(&self) -> Option<FrameId> {
        match self {
            Event::Hit { slot, .. } | Event::Fault { slot, .. } => Some(*slot),
            Event::Start | Event::Done => None,
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Event::Hit { .. })
    }

    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Event::Fault { .. })
    }

    /// Whether a resident page was evicted.
    #[inline]
    pub fn is_eviction(&self) -> bool {
        matches!(
            self,
            Event::Fault {
                replaced: Some(_),
                ..
            }
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Start => write!(f, "Ready to start"),
            Event::Hit { page, slot } => write!(f, "Hit: page {} found in frame {}", page, slot.0),
            Event::Fault {
                page,
                replaced: Some(victim),
                slot,
            } => write!(
                f,
                "Fault: page {} replaced page {} in frame {}",
                page, victim, slot.0
            ),
            Event::Fault {
                page,
                replaced: None,
                slot,
            } => write!(f, "Fault: page {} loaded into empty frame {}", page, slot.0),
            Event::Done => write!(f, "Simulation complete"),
        }
    }
}
