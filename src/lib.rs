//! pagesim - A step-through page replacement simulator with undo.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │            Presentation layer (not part of this crate)          │
//! │        reads StateView / TimelineEntry, calls step_* ops        │
//! └─────────────────────────────────────────────────────────────────┘
//!                                  ↓
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Simulator (sim/)  [+ SharedSimulator]             │   │
//! │  │   Idle → Ready → Running → Finished, History (undo)     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Replacers (sim/replacer/)                      │   │
//! │  │              FIFO | LRU | Optimal                        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │   FrameSet + Event + StepStats + common/ (ids, config)   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, config)
//! - [`sim`] - Simulator, replacers and undo history
//! - [`error`] - Error types
//!
//! # Quick Start
//! ```
//! use pagesim::common::config::parse_references;
//! use pagesim::{Policy, Simulator};
//!
//! let mut sim = Simulator::new();
//! let refs = parse_references("7 0 1 2 0 3 0 4").unwrap();
//! sim.configure(Policy::Fifo, 3, refs).unwrap();
//!
//! let events = sim.run_to_end().unwrap();
//! let stats = sim.current_state().unwrap().stats;
//! assert_eq!(events.len(), 8);
//! assert_eq!(stats.faults, 7);
//! ```

pub mod common;
pub mod error;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::{SimulationConfig, MAX_FRAMES, MIN_FRAMES};
pub use common::{FrameId, PageId};
pub use error::{Error, InvariantError, Result};

pub use sim::{
    Event, FrameSet, Phase, Policy, PolicyState, SharedSimulator, Simulator, StateView,
    StepStats, TimelineEntry,
};
