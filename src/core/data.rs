//! In-memory trajectory storage.
//!
//! The whole dataset is loaded once at startup, partitioned by particle
//! id, and never mutated afterwards. Storage is columnar per track so
//! the renderer can hand out trail windows as plain slices.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, trace};

/// One input row: a single particle's state at one time step.
///
/// Field names match the CSV header `time,id,mass,x,y,z,vx,vy,vz`
/// exactly; every field is numeric, `id` is an integer.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sample {
    pub time: f64,
    pub id: i64,
    pub mass: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
}

/// Full history of one particle, columnar, in input order.
///
/// The loader does not sort: sample order within a track is the
/// encounter order from the file. Velocities are part of the data
/// contract and kept alongside the positions even though nothing
/// renders them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Track {
    pub id: i64,
    pub times: Vec<f64>,
    pub masses: Vec<f64>,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub zs: Vec<f64>,
    pub vxs: Vec<f64>,
    pub vys: Vec<f64>,
    pub vzs: Vec<f64>,
}

impl Track {
    fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    fn push(&mut self, sample: &Sample) {
        self.times.push(sample.time);
        self.masses.push(sample.mass);
        self.xs.push(sample.x);
        self.ys.push(sample.y);
        self.zs.push(sample.z);
        self.vxs.push(sample.vx);
        self.vys.push(sample.vy);
        self.vzs.push(sample.vz);
    }

    /// Number of time steps recorded for this particle.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Representative mass for display sizing: the first sample's mass,
    /// not an average or max.
    pub fn display_mass(&self) -> f64 {
        self.masses.first().copied().unwrap_or(0.0)
    }
}

/// All tracks, partitioned by particle id in encounter order.
#[derive(Debug, Default)]
pub struct TrackSet {
    tracks: Vec<Track>,
    /// Maps particle id to position in `tracks`
    index: HashMap<i64, usize>,
}

impl TrackSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample to its particle's track, creating the track the
    /// first time the id is seen.
    pub fn push(&mut self, sample: Sample) {
        let idx = match self.index.get(&sample.id) {
            Some(&idx) => idx,
            None => {
                let idx = self.tracks.len();
                self.tracks.push(Track::new(sample.id));
                self.index.insert(sample.id, idx);
                debug!(id = sample.id, idx, "New particle registered");
                idx
            }
        };

        let track = &mut self.tracks[idx];
        track.push(&sample);

        trace!(id = sample.id, len = track.len(), "Sample stored");
    }

    /// Tracks in encounter order of their ids.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, id: i64) -> Option<&Track> {
        self.index.get(&id).map(|&idx| &self.tracks[idx])
    }

    /// Number of distinct particle ids seen.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Total samples across all tracks.
    pub fn sample_count(&self) -> usize {
        self.tracks.iter().map(Track::len).sum()
    }

    /// Frame count for playback: the first-encountered particle's track
    /// length. Other tracks are not required to match; short ones freeze
    /// at their last sample during playback.
    pub fn frame_count(&self) -> usize {
        self.tracks.first().map_or(0, Track::len)
    }

    /// Largest |x| or |y| anywhere in the dataset. The view is scaled
    /// once from this, never per frame.
    pub fn max_abs_xy(&self) -> f64 {
        self.tracks
            .iter()
            .flat_map(|t| t.xs.iter().chain(t.ys.iter()))
            .fold(0.0, |acc: f64, &v| acc.max(v.abs()))
    }
}
