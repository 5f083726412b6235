//! Animated 2-D viewer for n-body simulation output.
//!
//! Reads the simulator's `data/output.csv` trajectory table, partitions
//! it by particle, and plays it back as a scatter/trail animation:
//! - an animated GIF written to `orbit_animation.gif`
//! - an interactive window, when a display is available
//!
//! The dataset is loaded once and immutable afterwards; both backends
//! draw from the same per-frame [`scene::Scene`] views.

pub mod app;
pub mod core;
pub mod export;
pub mod scene;
pub mod theme;
