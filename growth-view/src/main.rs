//! Application entry point for the branch growth viewer.
//!
//! This binary installs logging, sets up eframe/egui and delegates the
//! growth run and its rendering to [`Viewer`] from the `viewer` module.
//!
//! An optional first argument fixes the seed: `branch-growth 42`.

mod viewer;

use rand::Rng;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};
use viewer::Viewer;

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop, or
///   the growth configuration is rejected.
fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,growth_core=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| rand::rng().random());
    info!(seed, "launching viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([440.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Branch Growth",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(seed)?))),
    )
}
