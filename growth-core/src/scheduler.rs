//! Frame-by-frame branch growth.
//!
//! A run looks like:
//! 1. [`GrowthScheduler::start`] clears the surface, seeds two tips on
//!    opposite canvas edges and asks the [`FrameClock`] for a frame.
//! 2. Every frame the host calls [`GrowthScheduler::tick`], which executes
//!    all tips queued for that generation. Each tip draws one segment and
//!    queues 0, 1 or 2 children for the *next* generation.
//! 3. Once a generation leaves nothing queued, no further frame is requested
//!    and the scheduler is [`Status::Idle`].

use crate::{
    clock::{FrameClock, FrameRequest},
    config::{Config, ConfigError},
    geometry::{Bounds, end_position},
    render::LineRenderer,
    types::{BranchTip, Generation, StepOutcome},
};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI};
use tracing::{debug, info, trace, warn};

/// Mutable state of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrowthState {
    /// Tips queued for the next generation.
    pub pending: Vec<BranchTip>,
    /// Generations executed since the last start.
    pub generation: Generation,
}

impl GrowthState {
    pub fn seeded(tips: impl IntoIterator<Item = BranchTip>) -> Self {
        Self {
            pending: tips.into_iter().collect(),
            generation: 0,
        }
    }

    pub fn status(&self) -> Status {
        if self.pending.is_empty() {
            Status::Idle
        } else {
            Status::Running
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Running,
}

/// What a single [`GrowthScheduler::tick`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub generation: Generation,
    /// Tips executed, equal to the number of segments drawn.
    pub executed: usize,
    pub discarded: usize,
    pub spawned: usize,
    /// Whether another frame was requested from the clock.
    pub requested_next: bool,
    /// Set when `Config::max_generations` stopped the run.
    pub capped: bool,
}

/// Totals of a headless [`GrowthScheduler::run_to_idle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: Generation,
    pub segments: usize,
    pub peak_pending: usize,
    pub capped: bool,
}

/// Picks one of the two symmetric seed configurations with equal odds.
///
/// - Vertical: one tip on the top edge heading `+90°`, one on the bottom
///   edge heading `-90°`, each at a random x.
/// - Horizontal: one tip on the left edge heading `0°`, one on the right
///   edge heading `180°`, each at a random y.
pub fn seed_tips(rng: &mut impl Rng, cfg: &Config) -> [BranchTip; 2] {
    let Vec2 { x: w, y: h } = cfg.canvas;
    if rng.random_bool(0.5) {
        [
            BranchTip::new(Vec2::new(w * rng.random::<f32>(), 0.0), FRAC_PI_2),
            BranchTip::new(Vec2::new(w * rng.random::<f32>(), h), -FRAC_PI_2),
        ]
    } else {
        [
            BranchTip::new(Vec2::new(0.0, h * rng.random::<f32>()), 0.0),
            BranchTip::new(Vec2::new(w, h * rng.random::<f32>()), PI),
        ]
    }
}

/// Executes one tip: draw a segment, then maybe queue children into `out`.
///
/// Random draws happen in a fixed order (length, `+` spread, `-` spread,
/// then one coin per candidate once warm-up is over) so seeded runs replay
/// exactly.
fn grow(
    tip: BranchTip,
    generation: Generation,
    cfg: &Config,
    bounds: &Bounds,
    rng: &mut impl Rng,
    renderer: &mut impl LineRenderer,
    out: &mut Vec<BranchTip>,
) -> StepOutcome {
    let len = cfg.segment_len * rng.random::<f32>();
    let end = end_position(tip.origin, len, tip.heading);
    renderer.draw_segment(tip.origin, end);

    if !bounds.contains(end) {
        trace!(x = end.x, y = end.y, "tip left the canvas");
        return StepOutcome::Discarded;
    }

    let candidates = [
        tip.heading + rng.random::<f32>() * cfg.spread,
        tip.heading - rng.random::<f32>() * cfg.spread,
    ];
    let forced = generation < cfg.warmup_generations;

    let mut children = 0;
    for heading in candidates {
        if forced || rng.random_bool(cfg.branch_probability) {
            out.push(BranchTip::new(end, heading));
            children += 1;
        }
    }
    StepOutcome::Grown { children }
}

/// Owns a [`GrowthState`] and advances it one generation per frame.
///
/// The renderer and clock are borrowed per call; the scheduler keeps no
/// reference to either between frames.
#[derive(Debug)]
pub struct GrowthScheduler<R> {
    cfg: Config,
    bounds: Bounds,
    state: GrowthState,
    rng: R,
}

impl<R: Rng> GrowthScheduler<R> {
    /// Creates an idle scheduler.
    ///
    /// ### Returns
    /// - `Err` if `cfg` fails [`Config::validate`].
    pub fn new(cfg: Config, rng: R) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            bounds: Bounds::from_config(&cfg),
            cfg,
            state: GrowthState::default(),
            rng,
        })
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn state(&self) -> &GrowthState {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn generation(&self) -> Generation {
        self.state.generation
    }

    pub fn pending(&self) -> &[BranchTip] {
        &self.state.pending
    }

    /// Starts a new run from randomly chosen seed tips.
    ///
    /// See [`seed_tips`] for the seed layout and
    /// [`GrowthScheduler::start_with`] for restart behavior.
    pub fn start(&mut self, renderer: &mut impl LineRenderer, clock: &mut impl FrameClock) {
        let seeds = seed_tips(&mut self.rng, &self.cfg);
        self.start_with(seeds, renderer, clock);
    }

    /// Starts a new run from the given seed tips.
    ///
    /// Clears the surface, resets the generation counter and requests the
    /// first frame. Starting while a run is in progress replaces that run:
    /// its queued tips are dropped.
    pub fn start_with(
        &mut self,
        seeds: impl IntoIterator<Item = BranchTip>,
        renderer: &mut impl LineRenderer,
        clock: &mut impl FrameClock,
    ) {
        if self.status() == Status::Running {
            warn!(
                generation = self.state.generation,
                dropped = self.state.pending.len(),
                "restarting growth while a run is in progress"
            );
        }

        renderer.clear();
        self.state = GrowthState::seeded(seeds);
        info!(seeds = self.state.pending.len(), "growth started");
        clock.request_frame();
    }

    /// Runs one generation.
    ///
    /// Does nothing when the queue is empty. Otherwise the queue is swapped
    /// out and every tip in it is executed; children they spawn land in the
    /// fresh queue and only run on the next tick. Another frame is requested
    /// if that queue ends up non-empty.
    pub fn tick(
        &mut self,
        renderer: &mut impl LineRenderer,
        clock: &mut impl FrameClock,
    ) -> GenerationReport {
        let Self {
            cfg,
            bounds,
            state,
            rng,
        } = self;

        if state.pending.is_empty() {
            return GenerationReport {
                generation: state.generation,
                ..GenerationReport::default()
            };
        }

        state.generation += 1;
        let generation = state.generation;
        let current = std::mem::take(&mut state.pending);

        let mut report = GenerationReport {
            generation,
            executed: current.len(),
            ..GenerationReport::default()
        };

        renderer.begin_generation(generation);
        for tip in current {
            match grow(tip, generation, cfg, bounds, rng, renderer, &mut state.pending) {
                StepOutcome::Discarded => report.discarded += 1,
                StepOutcome::Grown { children } => report.spawned += usize::from(children),
            }
        }

        if let Some(max) = cfg.max_generations
            && generation >= max
            && !state.pending.is_empty()
        {
            info!(
                generation,
                dropped = state.pending.len(),
                "generation cap reached"
            );
            state.pending.clear();
            report.capped = true;
        }

        debug!(
            generation,
            executed = report.executed,
            discarded = report.discarded,
            spawned = report.spawned,
            pending = state.pending.len(),
            "generation complete"
        );

        if state.pending.is_empty() {
            info!(generation, "growth finished");
        } else {
            clock.request_frame();
            report.requested_next = true;
        }
        report
    }

    /// Executes a single tip at the current generation, queueing its
    /// children into `out` instead of the scheduler's own queue.
    pub fn step(
        &mut self,
        tip: BranchTip,
        renderer: &mut impl LineRenderer,
        out: &mut Vec<BranchTip>,
    ) -> StepOutcome {
        grow(
            tip,
            self.state.generation,
            &self.cfg,
            &self.bounds,
            &mut self.rng,
            renderer,
            out,
        )
    }

    /// Ticks until the queue drains, acting as its own frame clock.
    ///
    /// Terminates with probability one for any valid config; set
    /// `Config::max_generations` for a hard bound.
    pub fn run_to_idle(&mut self, renderer: &mut impl LineRenderer) -> RunSummary {
        let mut clock = FrameRequest::new();
        let mut summary = RunSummary {
            generations: self.state.generation,
            peak_pending: self.state.pending.len(),
            ..RunSummary::default()
        };

        while self.status() == Status::Running {
            let report = self.tick(renderer, &mut clock);
            clock.take();

            summary.generations = report.generation;
            summary.segments += report.executed;
            summary.peak_pending = summary.peak_pending.max(self.state.pending.len());
            summary.capped |= report.capped;
        }
        summary
    }
}
