use glam::Vec2;
use std::f32::consts::PI;

/// Width and height of the reference canvas.
pub const CANVAS_SIZE: f32 = 400.0;
/// Upper bound (exclusive) of a single segment's length.
pub const SEGMENT_LEN: f32 = 5.0;
/// Generations during which every surviving tip forks in two.
pub const WARMUP_GENERATIONS: u32 = 5;
/// Maximum angular deviation of a child heading, 15 degrees.
pub const SPREAD: f32 = PI / 12.0;
/// Chance that a candidate child is kept once warm-up is over.
pub const BRANCH_PROBABILITY: f64 = 0.5;

/// Parameters of the growth process.
///
/// [`Config::default`] reproduces the reference drawing. `margin` and
/// `max_generations` are off by default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Canvas size `(W, H)`; `(0, 0)` is the opposite corner.
    pub canvas: Vec2,
    pub segment_len: f32,
    pub warmup_generations: u32,
    /// Spread in radians.
    pub spread: f32,
    pub branch_probability: f64,
    /// Extra room around the canvas before a tip is discarded.
    pub margin: f32,
    /// Stop requesting frames after this many generations.
    pub max_generations: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: Vec2::splat(CANVAS_SIZE),
            segment_len: SEGMENT_LEN,
            warmup_generations: WARMUP_GENERATIONS,
            spread: SPREAD,
            branch_probability: BRANCH_PROBABILITY,
            margin: 0.0,
            max_generations: None,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("canvas must have a positive finite size, got {width}x{height}")]
    Canvas { width: f32, height: f32 },
    #[error("segment length must be positive and finite, got {0}")]
    SegmentLen(f32),
    #[error("spread must be non-negative and finite, got {0}")]
    Spread(f32),
    #[error("branch probability must lie in [0, 1], got {0}")]
    BranchProbability(f64),
    #[error("margin must be non-negative and finite, got {0}")]
    Margin(f32),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Vec2 { x: w, y: h } = self.canvas;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::Canvas {
                width: w,
                height: h,
            });
        }
        if !(self.segment_len.is_finite() && self.segment_len > 0.0) {
            return Err(ConfigError::SegmentLen(self.segment_len));
        }
        if !(self.spread.is_finite() && self.spread >= 0.0) {
            return Err(ConfigError::Spread(self.spread));
        }
        if !(0.0..=1.0).contains(&self.branch_probability) {
            return Err(ConfigError::BranchProbability(self.branch_probability));
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(ConfigError::Margin(self.margin));
        }
        Ok(())
    }
}
