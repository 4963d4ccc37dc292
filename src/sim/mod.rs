//! Page replacement simulation.
//!
//! The simulator replays a reference string against a fixed set of frames
//! under one replacement policy, one reference per step, and can undo any
//! step.
//!
//! # Components
//! - [`Simulator`] - The step/undo state machine
//! - [`SharedSimulator`] - Lock-protected handle for multi-threaded callers
//! - [`FrameSet`] - The frames and the pages resident in them
//! - [`Event`] - What one step did
//! - [`StepStats`] - Hit/fault counters
//! - [`history`] - Snapshots backing undo
//! - [`replacer`] - Eviction policy implementations

mod event;
mod frames;
pub mod history;
pub mod replacer;
mod shared;
mod simulator;
mod stats;

pub use event::Event;
pub use frames::FrameSet;
pub use replacer::{Outcome, Policy, PolicyState};
pub use shared::SharedSimulator;
pub use simulator::{Phase, Simulator, StateView, TimelineEntry};
pub use stats::StepStats;
