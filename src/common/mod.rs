//! Common types shared across pagesim.
//!
//! This module contains the primitives everything else builds on:
//! - Configuration limits and [`config::SimulationConfig`]
//! - Identifiers ([`PageId`], [`FrameId`])

pub mod config;
mod frame_id;
mod page_id;

pub use frame_id::FrameId;
pub use page_id::PageId;
