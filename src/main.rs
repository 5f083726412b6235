//! Trajectory viewer binary.
//!
//! Run from the repository root, next to the simulator's `data/`
//! directory. A load failure is the only fatal path; export and display
//! failures are logged and the process still exits normally.

use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use orbit_vis::core::load_tracks;
use orbit_vis::scene::{Scene, DAYS_PER_YEAR};
use orbit_vis::{app, export};

/// Fixed input path, as written by the simulator.
const INPUT_PATH: &str = "data/output.csv";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,orbit_vis=info"));
    fmt().with_env_filter(filter).with_target(false).init();

    info!(path = INPUT_PATH, "Loading simulation data");
    let tracks = load_tracks(INPUT_PATH)?;
    info!(
        particles = tracks.track_count(),
        samples = tracks.sample_count(),
        "Simulation data loaded"
    );

    let scene = Scene::new(tracks);
    info!(
        frames = scene.frame_count(),
        span_years = format!("{:.2}", scene.frame_count() as f64 / DAYS_PER_YEAR),
        "Creating animation"
    );

    match export::export_gif(&scene, export::GIF_PATH.as_ref()) {
        Ok(()) => info!(path = export::GIF_PATH, "Animation saved"),
        Err(e) => error!(error = %e, "Could not save GIF"),
    }

    info!("Attempting to show interactive plot, close the window to exit");
    if let Err(e) = app::run_viewer(scene) {
        error!(error = %e, "Could not show plot");
    }

    info!("Animation closed");
    Ok(())
}
