//! Desktop host for the branch growth, built with eframe/egui.
//!
//! [`Viewer`] plays the part of the drawing surface and the frame clock:
//! segments are recorded into a [`SegmentLog`] and repainted every frame,
//! and a pending [`FrameRequest`] is answered by one
//! [`GrowthScheduler::tick`] followed by a repaint request.

use eframe::App;
use glam::Vec2;
use growth_core::{
    Config, ConfigError, FrameRequest, GenerationReport, GrowthScheduler, SegmentLog, Status,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{error, info};

const BACKGROUND: egui::Color32 = egui::Color32::WHITE;
// Black at 40% opacity.
const SEGMENT_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 102);

/// Main application state for the viewer.
///
/// ### Fields
/// - `scheduler` - Growth state machine for the current run.
/// - `canvas` - Every segment drawn since the last start.
/// - `clock` - Outstanding frame request from the scheduler.
/// - `seed` - Seed of the current run; "Replay" restarts with it.
/// - `last_report` - Outcome of the most recent generation.
pub struct Viewer {
    scheduler: GrowthScheduler<ChaCha8Rng>,
    canvas: SegmentLog,
    clock: FrameRequest,
    cfg: Config,

    seed: u64,
    last_report: GenerationReport,
}

impl Viewer {
    /// Creates a viewer and immediately starts a run from `seed`.
    ///
    /// ### Returns
    /// - `Err` if the default configuration is rejected.
    pub fn new(seed: u64) -> Result<Self, ConfigError> {
        let cfg = Config::default();
        let mut viewer = Self {
            scheduler: GrowthScheduler::new(cfg, ChaCha8Rng::seed_from_u64(seed))?,
            canvas: SegmentLog::new(),
            clock: FrameRequest::new(),
            cfg,
            seed,
            last_report: GenerationReport::default(),
        };
        viewer.scheduler.start(&mut viewer.canvas, &mut viewer.clock);
        Ok(viewer)
    }

    /// Replaces the current run with a fresh one seeded from `seed`.
    fn restart(&mut self, seed: u64) -> Result<(), ConfigError> {
        self.scheduler = GrowthScheduler::new(self.cfg, ChaCha8Rng::seed_from_u64(seed))?;
        self.seed = seed;
        self.last_report = GenerationReport::default();
        self.clock = FrameRequest::new();
        self.scheduler.start(&mut self.canvas, &mut self.clock);
        info!(seed, "run restarted");
        Ok(())
    }

    fn restart_or_log(&mut self, seed: u64) {
        if let Err(e) = self.restart(seed) {
            error!(error = %e, seed, "could not restart growth");
        }
    }

    /// Delivers the outstanding frame request, if any.
    ///
    /// ### Returns
    /// `true` if a generation ran.
    fn advance(&mut self) -> bool {
        if !self.clock.take() {
            return false;
        }
        self.last_report = self.scheduler.tick(&mut self.canvas, &mut self.clock);
        true
    }

    /// Scale and placement of the canvas inside `avail`, keeping its aspect.
    fn canvas_rect(&self, avail: egui::Rect) -> (egui::Rect, f32) {
        let size = self.cfg.canvas;
        let scale = (avail.width() / size.x).min(avail.height() / size.y);
        let rect = egui::Rect::from_center_size(
            avail.center(),
            egui::vec2(size.x * scale, size.y * scale),
        );
        (rect, scale)
    }

    /// Converts a canvas position to screen-space.
    ///
    /// Canvas `(0, 0)` is the top-left corner of `rect` and y grows downward,
    /// so no flip is applied.
    fn canvas_to_screen(p: Vec2, rect: egui::Rect, scale: f32) -> egui::Pos2 {
        egui::pos2(rect.min.x + p.x * scale, rect.min.y + p.y * scale)
    }

    /// Builds the top panel (restart controls, seed).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Restart").clicked() {
                    let seed = rand::rng().random();
                    self.restart_or_log(seed);
                }

                if ui.button("Replay").clicked() {
                    self.restart_or_log(self.seed);
                }

                ui.separator();
                let mut seed = self.seed;
                let changed = ui
                    .add(egui::DragValue::new(&mut seed).prefix("seed = "))
                    .changed();
                if changed {
                    self.restart_or_log(seed);
                }
            });
        });
    }

    /// Builds the bottom status bar.
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let state = match self.scheduler.status() {
                    Status::Idle => "idle",
                    Status::Running => "running",
                };
                ui.label(state);
                ui.separator();
                ui.label(format!("segments = {}", self.canvas.len()));
                ui.label(format!("pending = {}", self.scheduler.pending().len()));
                ui.label(format!(
                    "last: +{} / -{}",
                    self.last_report.spawned, self.last_report.discarded
                ));
                ui.label(format!("generation = {}", self.scheduler.generation()));
            });
        });
    }

    /// Paints every recorded segment onto the canvas area.
    fn ui_central_panel(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let (rect, scale) = self.canvas_rect(response.rect);
            let painter = ui.painter_at(rect);

            painter.rect_filled(rect, 0.0, BACKGROUND);

            let stroke = egui::Stroke::new(1.0, SEGMENT_COLOR);
            for seg in self.canvas.segments() {
                let a = Self::canvas_to_screen(seg.from, rect, scale);
                let b = Self::canvas_to_screen(seg.to, rect, scale);
                painter.line_segment([a, b], stroke);
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback: runs at most one generation, then draws.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance();

        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);

        if self.clock.is_pending() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(viewer: &mut Viewer) -> usize {
        let mut frames = 0;
        while viewer.advance() {
            frames += 1;
        }
        frames
    }

    #[test]
    fn new_viewer_has_a_run_waiting_for_its_first_frame() {
        let viewer = Viewer::new(7).unwrap();

        assert_eq!(viewer.canvas.clears(), 1);
        assert!(viewer.canvas.is_empty());
        assert!(viewer.clock.is_pending());
        assert_eq!(viewer.scheduler.status(), Status::Running);
    }

    #[test]
    fn advance_runs_one_generation_per_request() {
        let mut viewer = Viewer::new(7).unwrap();

        assert!(viewer.advance());
        assert_eq!(viewer.scheduler.generation(), 1);
        assert_eq!(viewer.canvas.len(), 2);

        assert!(viewer.advance());
        assert_eq!(viewer.scheduler.generation(), 2);
        assert_eq!(viewer.last_report.generation, 2);
    }

    #[test]
    fn advance_stops_once_idle() {
        let mut viewer = Viewer::new(3).unwrap();
        let frames = drain(&mut viewer);

        assert_eq!(frames as u32, viewer.scheduler.generation());
        assert_eq!(viewer.scheduler.status(), Status::Idle);
        assert!(!viewer.clock.is_pending());
        assert!(!viewer.advance());
    }

    #[test]
    fn replay_draws_the_same_picture() {
        let mut viewer = Viewer::new(99).unwrap();
        drain(&mut viewer);
        let first = viewer.canvas.segments().to_vec();

        viewer.restart(99).unwrap();
        assert!(viewer.canvas.is_empty());
        drain(&mut viewer);

        assert_eq!(viewer.canvas.segments(), first.as_slice());
    }

    #[test]
    fn restart_mid_run_resets_generation() {
        let mut viewer = Viewer::new(5).unwrap();
        viewer.advance();
        viewer.advance();

        viewer.restart(6).unwrap();

        assert_eq!(viewer.seed, 6);
        assert_eq!(viewer.scheduler.generation(), 0);
        assert!(viewer.canvas.is_empty());
        assert!(viewer.clock.is_pending());
    }

    #[test]
    fn canvas_fits_and_maps_corners() {
        let viewer = Viewer::new(1).unwrap();
        let avail = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0));

        let (rect, scale) = viewer.canvas_rect(avail);
        assert_eq!(scale, 1.5);
        assert_eq!(rect.size(), egui::vec2(600.0, 600.0));
        assert_eq!(rect.center(), avail.center());

        let top_left = Viewer::canvas_to_screen(Vec2::ZERO, rect, scale);
        let bottom_right = Viewer::canvas_to_screen(Vec2::splat(400.0), rect, scale);
        assert_eq!(top_left, rect.min);
        assert_eq!(bottom_right, rect.max);
    }
}
