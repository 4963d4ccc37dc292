//! Thread-safe simulator handle.
//!
//! A presentation layer that plays a simulation on a timer typically steps
//! from a timer thread while a render thread reads state. [`SharedSimulator`]
//! wraps one [`Simulator`] behind a `parking_lot::Mutex` for that case.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::common::PageId;
use crate::error::Result;
use crate::sim::{Event, Phase, Policy, Simulator, StateView};

/// Cloneable, lock-protected handle to a [`Simulator`].
///
/// # Thread Safety
/// Every call holds the lock for the whole operation and returns owned
/// data, so a reader never sees a step half applied and never keeps a
/// borrow into the engine.
#[derive(Debug, Clone, Default)]
pub struct SharedSimulator {
    inner: Arc<Mutex<Simulator>>,
}

impl SharedSimulator {
    /// Create a handle around an idle simulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`Simulator::configure`].
    pub fn configure(&self, policy: Policy, frame_count: usize, references: Vec<PageId>) -> Result<()> {
        self.inner.lock().configure(policy, frame_count, references)
    }

    /// See [`Simulator::step_forward`].
    pub fn step_forward(&self) -> Result<Event> {
        self.inner.lock().step_forward()
    }

    /// See [`Simulator::step_backward`].
    pub fn step_backward(&self) -> bool {
        self.inner.lock().step_backward()
    }

    /// See [`Simulator::current_state`].
    pub fn current_state(&self) -> Option<StateView> {
        self.inner.lock().current_state()
    }

    pub fn phase(&self) -> Phase {
        self.inner.lock().phase()
    }

    /// See [`Simulator::reset`].
    pub fn reset(&self) {
        self.inner.lock().reset()
    }

    /// Run `f` with exclusive access to the simulator.
    ///
    /// For compound operations that must not interleave with other callers,
    /// such as "step and read the timeline".
    pub fn with<R>(&self, f: impl FnOnce(&mut Simulator) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<Simulator> for SharedSimulator {
    fn from(sim: Simulator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sim)),
        }
    }
}
