//! Procedural branch growth, one animation frame per generation.
//!
//! Main components:
//! - [`scheduler`] — growth state, the per-frame generation tick and the
//!   branching policy.
//! - [`geometry`] — segment endpoints and the discard rectangle.
//! - [`config`] — growth constants and their validation.
//! - [`render`] — the line drawing seam and an in-memory segment log.
//! - [`clock`] — the "request another frame" seam.
//! - [`types`] — branch tips, segments and step outcomes.

pub mod clock;
pub mod config;
pub mod geometry;
pub mod render;
pub mod scheduler;
pub mod types;

pub use clock::{FrameClock, FrameRequest};
pub use config::{Config, ConfigError};
pub use render::{LineRenderer, SegmentLog};
pub use scheduler::{GenerationReport, GrowthScheduler, GrowthState, RunSummary, Status};
pub use types::{BranchTip, Point, Segment, StepOutcome};
