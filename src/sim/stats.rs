//! Hit/fault statistics.

use std::fmt;

use crate::sim::Event;

/// Hit and fault counters for a simulation run.
///
/// Counters only go up while stepping forward. Undo restores the counters
/// recorded in the previous snapshot rather than decrementing, so the
/// values in history never change.
///
/// # Example
/// ```
/// use pagesim::StepStats;
///
/// let stats = StepStats { hits: 7, faults: 3 };
/// assert_eq!(stats.steps(), 10);
/// assert_eq!(stats.hit_rate(), 0.7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StepStats {
    /// Number of references that found their page resident.
    pub hits: u64,

    /// Number of references that had to load their page.
    pub faults: u64,
}

impl StepStats {
    /// Stats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the counter matching `event`. `Start` and `Done` count nothing.
    pub fn record(&mut self, event: &Event) {
        match event {
            Event::Hit { .. } => self.hits += 1,
            Event::Fault { .. } => self.faults += 1,
            Event::Start | Event::Done => {}
        }
    }

    /// Total references processed.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.hits + self.faults
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.steps();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        let total = self.steps();
        if total == 0 {
            0.0
        } else {
            self.faults as f64 / total as f64
        }
    }
}

impl fmt::Display for StepStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.faults,
            self.hit_rate() * 100.0
        )
    }
}
