//! Simulator - the step-through replacement engine.
//!
//! The [`Simulator`] provides:
//! - Run configuration with validation
//! - Forward stepping through the reference string, one event per step
//! - Undo back to any earlier step via recorded snapshots
//! - Read-only views of the current state for a presentation layer

use log::{debug, trace, warn};

use crate::common::config::SimulationConfig;
use crate::common::PageId;
use crate::error::{Error, Result};
use crate::sim::history::{History, Snapshot};
use crate::sim::{Event, FrameSet, Policy, PolicyState, StepStats};

/// Where a simulator is in its lifecycle.
///
/// ```text
///          configure           step_forward            step_forward
///   Idle ────────────▶ Ready ──────────────▶ Running ──────────────▶ Finished
///                            ◀──────────────         ◀──────────────
///                              step_backward           step_backward
///
///   reset: any phase ──▶ Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No run configured.
    Idle,
    /// Configured, no reference processed yet.
    Ready,
    /// Some but not all references processed.
    Running,
    /// Every reference processed.
    Finished,
}

/// Owned copy of the simulator state between steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateView {
    pub frames: FrameSet,
    /// Index of the next unprocessed reference.
    pub cursor: usize,
    pub policy_state: PolicyState,
    pub last_event: Event,
    pub stats: StepStats,
    pub is_finished: bool,
}

/// One committed step, as a step grid shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Index of the processed reference.
    pub step: usize,
    pub reference: PageId,
    /// Frames after the step.
    pub frames: FrameSet,
    pub event: Event,
}

/// A configured run: the inputs plus the undo history.
#[derive(Debug, Clone)]
struct Session {
    policy: Policy,
    references: Vec<PageId>,
    history: History,
    /// Whether the `Done` sentinel has been handed out for this terminal
    /// state.
    done_emitted: bool,
}

impl Session {
    fn new(config: SimulationConfig) -> Self {
        let (policy, frame_count, references) = config.into_parts();
        let initial = Snapshot::new(
            FrameSet::new(frame_count),
            0,
            PolicyState::new(policy, frame_count),
            Event::Start,
            StepStats::new(),
        );

        Self {
            policy,
            references,
            history: History::new(initial),
            done_emitted: false,
        }
    }

    fn cursor(&self) -> usize {
        self.history.current().cursor()
    }

    fn is_finished(&self) -> bool {
        self.cursor() == self.references.len()
    }

    fn step_forward(&mut self) -> Result<Event> {
        let current = self.history.current();
        let cursor = current.cursor();

        let Some(&page) = self.references.get(cursor) else {
            if self.done_emitted {
                warn!("step_forward called after simulation finished");
                return Err(Error::StepAfterFinished);
            }
            self.done_emitted = true;
            debug!("{} simulation done: {}", self.policy, current.stats());
            return Ok(Event::Done);
        };

        let outcome = current
            .policy_state()
            .apply(current.frames(), page, &self.references[cursor + 1..]);
        debug_assert_eq!(outcome.state.check_invariants(&outcome.frames), Ok(()));

        let mut stats = current.stats();
        stats.record(&outcome.event);

        trace!(
            "{} step {}: {} -> {}",
            self.policy,
            cursor,
            outcome.event,
            outcome.frames
        );

        let event = outcome.event;
        self.history.push(Snapshot::new(
            outcome.frames,
            cursor + 1,
            outcome.state,
            event,
            stats,
        ));

        Ok(event)
    }

    fn step_backward(&mut self) -> bool {
        if !self.history.undo() {
            return false;
        }
        self.done_emitted = false;
        debug!("{} undo to step {}", self.policy, self.cursor());
        debug_assert_eq!(self.history.verify(), Ok(()));
        true
    }

    fn view(&self) -> StateView {
        let current = self.history.current();
        let last_event = if self.done_emitted {
            Event::Done
        } else {
            current.event()
        };

        StateView {
            frames: current.frames().clone(),
            cursor: current.cursor(),
            policy_state: current.policy_state().clone(),
            last_event,
            stats: current.stats(),
            is_finished: self.is_finished(),
        }
    }
}

/// Step-through page replacement simulator.
///
/// Owns all simulation state. Callers get owned [`StateView`] copies, never
/// references into the engine, so nothing outside can observe or cause a
/// half-applied step.
///
/// # Usage
/// ```
/// use pagesim::{Event, PageId, Policy, Simulator};
///
/// let mut sim = Simulator::new();
/// let refs = [1, 2, 1].map(PageId::new).to_vec();
/// sim.configure(Policy::Lru, 2, refs).unwrap();
///
/// sim.step_forward().unwrap();
/// sim.step_forward().unwrap();
/// assert!(sim.step_forward().unwrap().is_hit());
/// assert_eq!(sim.step_forward().unwrap(), Event::Done);
///
/// sim.step_backward();
/// assert_eq!(sim.current_state().unwrap().cursor, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    session: Option<Session>,
}

impl Simulator {
    /// Create an idle simulator.
    pub fn new() -> Self {
        Self { session: None }
    }

    // ========================================================================
    // Public API: Lifecycle
    // ========================================================================

    /// Configure a new run, replacing any previous one.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `frame_count` is outside 1..=8 or
    ///   `references` is empty. The simulator is left idle.
    pub fn configure(
        &mut self,
        policy: Policy,
        frame_count: usize,
        references: Vec<PageId>,
    ) -> Result<()> {
        self.session = None;
        let config = SimulationConfig::new(policy, frame_count, references).map_err(|e| {
            debug!("rejected configuration: {}", e);
            e
        })?;
        self.configure_with(config);
        Ok(())
    }

    /// Configure a new run from an already validated config.
    pub fn configure_with(&mut self, config: SimulationConfig) {
        debug!(
            "configured {} with {} frames over {} references",
            config.policy(),
            config.frame_count(),
            config.references().len()
        );
        self.session = Some(Session::new(config));
    }

    /// Discard the run and its history.
    pub fn reset(&mut self) {
        if self.session.take().is_some() {
            debug!("simulation reset");
        }
    }

    // ========================================================================
    // Public API: Stepping
    // ========================================================================

    /// Process the next reference.
    ///
    /// Once every reference is processed, the next call returns
    /// [`Event::Done`] without changing any counters.
    ///
    /// # Errors
    /// - `Error::NotConfigured` if the simulator is idle
    /// - `Error::StepAfterFinished` if `Done` was already returned; state
    ///   is left unchanged
    pub fn step_forward(&mut self) -> Result<Event> {
        match self.session.as_mut() {
            Some(session) => session.step_forward(),
            None => {
                warn!("step_forward called with no simulation configured");
                Err(Error::NotConfigured)
            }
        }
    }

    /// Undo the most recent step.
    ///
    /// Returns `false` without doing anything when there is nothing to
    /// undo (at the initial state, or idle).
    pub fn step_backward(&mut self) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.step_backward())
    }

    /// Step until every reference is processed.
    ///
    /// Returns the events of the steps taken, not including the `Done`
    /// sentinel (which the next `step_forward` still emits).
    ///
    /// # Errors
    /// - `Error::NotConfigured` if the simulator is idle
    pub fn run_to_end(&mut self) -> Result<Vec<Event>> {
        let Some(session) = self.session.as_mut() else {
            return Err(Error::NotConfigured);
        };

        let mut events = Vec::with_capacity(session.references.len() - session.cursor());
        while !session.is_finished() {
            events.push(session.step_forward()?);
        }
        Ok(events)
    }

    // ========================================================================
    // Public API: Inspection
    // ========================================================================

    /// Copy of the current state, or `None` when idle.
    pub fn current_state(&self) -> Option<StateView> {
        self.session.as_ref().map(Session::view)
    }

    pub fn phase(&self) -> Phase {
        match &self.session {
            None => Phase::Idle,
            Some(session) if session.is_finished() => Phase::Finished,
            Some(session) if session.cursor() == 0 => Phase::Ready,
            Some(_) => Phase::Running,
        }
    }

    pub fn policy(&self) -> Option<Policy> {
        self.session.as_ref().map(|session| session.policy)
    }

    /// The reference string of the current run (empty when idle).
    pub fn references(&self) -> &[PageId] {
        match &self.session {
            Some(session) => &session.references,
            None => &[],
        }
    }

    /// Number of recorded snapshots, including the initial one (0 when idle).
    pub fn history_len(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |session| session.history.len())
    }

    pub fn can_step_backward(&self) -> bool {
        self.history_len() > 1
    }

    /// References not yet processed.
    pub fn remaining(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |session| session.references.len() - session.cursor())
    }

    /// Every committed step so far, oldest first.
    pub fn timeline(&self) -> Vec<TimelineEntry> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };

        session
            .history
            .iter()
            .skip(1)
            .map(|snapshot| {
                let step = snapshot.cursor() - 1;
                TimelineEntry {
                    step,
                    reference: session.references[step],
                    frames: snapshot.frames().clone(),
                    event: snapshot.event(),
                }
            })
            .collect()
    }
}
