//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - Rotating pointer over the frames
//! - [`LruReplacer`] - Recency list, least-recent first
//! - [`OptimalReplacer`] - Offline lookahead (Belady)
//!
//! The policies share one hit/fault contract, implemented once in
//! [`PolicyState::apply`]; each replacer only chooses a victim when the
//! frames are full.

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use std::fmt;
use std::str::FromStr;

use crate::common::{FrameId, PageId};
use crate::error::{Error, InvariantError};
use crate::sim::{Event, FrameSet};

/// The replacement policy a simulation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Lru,
    Optimal,
}

impl Policy {
    /// Every policy, in menu order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" => Ok(Policy::Optimal),
            other => Err(Error::config(format!("unknown policy {:?}", other))),
        }
    }
}

/// Policy-private bookkeeping, one variant per policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PolicyState {
    Fifo(FifoReplacer),
    Lru(LruReplacer),
    Optimal(OptimalReplacer),
}

/// Result of applying a policy to one reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub frames: FrameSet,
    pub state: PolicyState,
    pub event: Event,
}

impl PolicyState {
    /// Fresh state for `policy` over `frame_count` frames.
    pub fn new(policy: Policy, frame_count: usize) -> Self {
        match policy {
            Policy::Fifo => PolicyState::Fifo(FifoReplacer::new(frame_count)),
            Policy::Lru => PolicyState::Lru(LruReplacer::new()),
            Policy::Optimal => PolicyState::Optimal(OptimalReplacer::new()),
        }
    }

    /// Which policy this state belongs to.
    pub fn policy(&self) -> Policy {
        match self {
            PolicyState::Fifo(_) => Policy::Fifo,
            PolicyState::Lru(_) => Policy::Lru,
            PolicyState::Optimal(_) => Policy::Optimal,
        }
    }

    /// Process a reference to `page`.
    ///
    /// Works on copies: neither `self` nor `frames` is touched, the new
    /// occupancy and state come back in the [`Outcome`]. `upcoming` is the
    /// part of the reference string after `page`; only Optimal reads it.
    ///
    /// # Contract
    /// - Resident page: `Hit`, frames unchanged.
    /// - Otherwise `Fault`: the lowest empty slot is filled if there is
    ///   one, else the policy picks the victim slot.
    /// - LRU moves the page to the most-recent end either way.
    pub fn apply(&self, frames: &FrameSet, page: PageId, upcoming: &[PageId]) -> Outcome {
        let mut frames = frames.clone();
        let mut state = self.clone();

        let event = match frames.position(page) {
            Some(slot) => Event::Hit { page, slot },
            None => {
                let slot = match frames.first_empty() {
                    Some(slot) => slot,
                    None => state.select_victim(&frames, upcoming),
                };
                let replaced = frames.replace(slot, page);
                Event::Fault {
                    page,
                    replaced,
                    slot,
                }
            }
        };

        if let PolicyState::Lru(lru) = &mut state {
            lru.record_access(page);
        }

        Outcome {
            frames,
            state,
            event,
        }
    }

    /// Pick the slot to evict from a full frame set.
    fn select_victim(&mut self, frames: &FrameSet, upcoming: &[PageId]) -> FrameId {
        match self {
            PolicyState::Fifo(fifo) => fifo.evict(),
            PolicyState::Lru(lru) => lru.evict(frames),
            PolicyState::Optimal(optimal) => optimal.victim(frames, upcoming),
        }
    }

    /// Check the policy's invariants against the current frames.
    ///
    /// - FIFO: pointer in range
    /// - LRU: recency list is a duplicate-free permutation of the residents
    pub fn check_invariants(&self, frames: &FrameSet) -> Result<(), InvariantError> {
        match self {
            PolicyState::Fifo(fifo) => fifo.check_invariants(frames),
            PolicyState::Lru(lru) => lru.check_invariants(frames),
            PolicyState::Optimal(_) => Ok(()),
        }
    }
}
