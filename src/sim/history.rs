//! Snapshot history for undo.
//!
//! Every committed step pushes a [`Snapshot`] onto the [`History`]; undo
//! pops one. Snapshots are plain values and are never modified after being
//! recorded. Each one carries a CRC32 taken at record time so
//! [`History::verify`] can prove that.

use crc32fast::Hasher;

use crate::error::InvariantError;
use crate::sim::{Event, FrameSet, PolicyState, StepStats};

/// Full simulator state at one step boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    frames: FrameSet,
    cursor: usize,
    policy_state: PolicyState,
    event: Event,
    stats: StepStats,
}

impl Snapshot {
    pub fn new(
        frames: FrameSet,
        cursor: usize,
        policy_state: PolicyState,
        event: Event,
        stats: StepStats,
    ) -> Self {
        Self {
            frames,
            cursor,
            policy_state,
            event,
            stats,
        }
    }

    pub fn frames(&self) -> &FrameSet {
        &self.frames
    }

    /// Index of the next unprocessed reference.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn policy_state(&self) -> &PolicyState {
        &self.policy_state
    }

    /// Event of the step that produced this snapshot.
    pub fn event(&self) -> Event {
        self.event
    }

    pub fn stats(&self) -> StepStats {
        self.stats
    }

    /// CRC32 over a canonical encoding of the snapshot.
    pub fn checksum(&self) -> u32 {
        let mut hasher = Hasher::new();

        hasher.update(&(self.cursor as u64).to_le_bytes());

        hasher.update(&(self.frames.len() as u64).to_le_bytes());
        for slot in self.frames.iter() {
            hasher.update(&encode_page(slot.map(|page| page.0)));
        }

        match &self.policy_state {
            PolicyState::Fifo(fifo) => {
                hasher.update(&[0]);
                hasher.update(&(fifo.pointer().0 as u64).to_le_bytes());
            }
            PolicyState::Lru(lru) => {
                hasher.update(&[1]);
                hasher.update(&(lru.recency().len() as u64).to_le_bytes());
                for page in lru.recency() {
                    hasher.update(&page.0.to_le_bytes());
                }
            }
            PolicyState::Optimal(_) => hasher.update(&[2]),
        }

        match self.event {
            Event::Start => hasher.update(&[0]),
            Event::Hit { page, slot } => {
                hasher.update(&[1]);
                hasher.update(&page.0.to_le_bytes());
                hasher.update(&(slot.0 as u64).to_le_bytes());
            }
            Event::Fault {
                page,
                replaced,
                slot,
            } => {
                hasher.update(&[2]);
                hasher.update(&page.0.to_le_bytes());
                hasher.update(&encode_page(replaced.map(|page| page.0)));
                hasher.update(&(slot.0 as u64).to_le_bytes());
            }
            Event::Done => hasher.update(&[3]),
        }

        hasher.update(&self.stats.hits.to_le_bytes());
        hasher.update(&self.stats.faults.to_le_bytes());

        hasher.finalize()
    }
}

/// Optional page as 5 bytes: presence tag then id.
fn encode_page(page: Option<u32>) -> [u8; 5] {
    let mut buf = [0u8; 5];
    if let Some(id) = page {
        buf[0] = 1;
        buf[1..].copy_from_slice(&id.to_le_bytes());
    }
    buf
}

#[derive(Debug, Clone)]
struct Recorded {
    snapshot: Snapshot,
    checksum: u32,
}

impl Recorded {
    fn new(snapshot: Snapshot) -> Self {
        let checksum = snapshot.checksum();
        Self { snapshot, checksum }
    }
}

/// Undo stack of snapshots.
///
/// The initial snapshot is held apart from the step snapshots, so the
/// history is never empty and undo can never remove the starting state.
#[derive(Debug, Clone)]
pub struct History {
    initial: Recorded,
    steps: Vec<Recorded>,
}

impl History {
    /// Start a history from the state before any step.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            initial: Recorded::new(initial),
            steps: Vec::new(),
        }
    }

    /// Record the state after a committed step.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.steps.push(Recorded::new(snapshot));
    }

    /// Drop the most recent step snapshot.
    ///
    /// Returns `false` (and does nothing) when only the initial snapshot
    /// remains.
    pub fn undo(&mut self) -> bool {
        self.steps.pop().is_some()
    }

    /// The most recent snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.steps.last().unwrap_or(&self.initial).snapshot
    }

    /// Number of snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.steps.len() + 1
    }

    /// Always false; the initial snapshot is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Snapshots from oldest to newest, initial first.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> + '_ {
        std::iter::once(&self.initial)
            .chain(self.steps.iter())
            .map(|recorded| &recorded.snapshot)
    }

    /// Recompute every checksum and compare with the one taken at record
    /// time.
    pub fn verify(&self) -> Result<(), InvariantError> {
        let recorded = std::iter::once(&self.initial).chain(self.steps.iter());
        for (i, entry) in recorded.enumerate() {
            let actual = entry.snapshot.checksum();
            if actual != entry.checksum {
                return Err(InvariantError::new(format!(
                    "snapshot {} changed after it was recorded (crc {:08x} != {:08x})",
                    i, actual, entry.checksum
                )));
            }
        }
        Ok(())
    }
}
