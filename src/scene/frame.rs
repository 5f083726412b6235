//! Frame-indexed scene state.
//!
//! `Scene::frame(k)` is a pure function over the immutable dataset; the
//! GIF driver and the window's playback loop both call it with a frame
//! index and draw whatever it returns.

use crate::core::TrackSet;
use crate::theme::palette_color;

use super::style::BodyClass;

/// Window/figure title.
pub const TITLE: &str = "N-Body Orbital Simulation";
/// Axis bounds margin over the dataset's largest |x| or |y|.
pub const VIEW_MARGIN: f64 = 1.15;
/// Sliding trail window, in samples.
pub const TRAIL_LEN: usize = 100;
/// One frame is one simulated day.
pub const DAYS_PER_YEAR: f64 = 365.25;
/// Playback delay per frame, for both the GIF and the window (~30 fps).
pub const FRAME_DELAY_MS: u32 = 33;

/// Fixed display attributes of one body, chosen once at load time.
#[derive(Debug, Clone, Copy)]
pub struct BodyStyle {
    pub id: i64,
    pub class: BodyClass,
    pub color: (u8, u8, u8),
}

/// What one frame draws for one body: the marker position and the trail
/// window ending at it.
pub struct BodyFrame<'a> {
    pub style: BodyStyle,
    pub x: f64,
    pub y: f64,
    pub trail_x: &'a [f64],
    pub trail_y: &'a [f64],
}

/// Everything one animation frame draws.
pub struct FrameView<'a> {
    /// Frame index, read as elapsed days
    pub day: usize,
    pub years: f64,
    pub bodies: Vec<BodyFrame<'a>>,
}

impl FrameView<'_> {
    /// Info box text, one entry per line.
    pub fn info_lines(&self) -> [String; 2] {
        [
            format!("Day: {}", self.day),
            format!("Year: {:.2}", self.years),
        ]
    }
}

/// The loaded dataset plus everything derived from it at startup:
/// per-body styles, the fixed view extent, and the frame count.
pub struct Scene {
    tracks: TrackSet,
    styles: Vec<BodyStyle>,
    view_extent: f64,
}

impl Scene {
    pub fn new(tracks: TrackSet) -> Self {
        let styles = tracks
            .tracks()
            .iter()
            .map(|t| BodyStyle {
                id: t.id,
                class: BodyClass::from_mass(t.display_mass()),
                color: palette_color(t.id),
            })
            .collect();
        let view_extent = VIEW_MARGIN * tracks.max_abs_xy();

        Self {
            tracks,
            styles,
            view_extent,
        }
    }

    /// One frame per time step of the first-encountered particle.
    pub fn frame_count(&self) -> usize {
        self.tracks.frame_count()
    }

    pub fn body_count(&self) -> usize {
        self.styles.len()
    }

    /// Symmetric half-extent of the square view. Fixed for the whole
    /// playback; a point at the data maximum sits strictly inside.
    pub fn view_extent(&self) -> f64 {
        self.view_extent
    }

    pub fn styles(&self) -> &[BodyStyle] {
        &self.styles
    }

    /// Build the view for frame `k`.
    ///
    /// A body whose track is shorter than `k + 1` freezes: its marker
    /// and trail stay where its last sample left them.
    pub fn frame(&self, k: usize) -> FrameView<'_> {
        let bodies = self
            .tracks
            .tracks()
            .iter()
            .zip(&self.styles)
            .filter(|(track, _)| !track.is_empty())
            .map(|(track, &style)| {
                let kc = k.min(track.len() - 1);
                let start = (kc + 1).saturating_sub(TRAIL_LEN);
                BodyFrame {
                    style,
                    x: track.xs[kc],
                    y: track.ys[kc],
                    trail_x: &track.xs[start..=kc],
                    trail_y: &track.ys[start..=kc],
                }
            })
            .collect();

        FrameView {
            day: k,
            years: k as f64 / DAYS_PER_YEAR,
            bodies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Sample;

    fn scene_with_lengths(lengths: &[usize]) -> Scene {
        let mut tracks = TrackSet::new();
        for step in 0..lengths.iter().copied().max().unwrap_or(0) {
            for (id, &len) in lengths.iter().enumerate() {
                if step < len {
                    tracks.push(Sample {
                        time: step as f64,
                        id: id as i64,
                        mass: 1.0,
                        x: (id * 1000 + step) as f64,
                        y: 0.0,
                        z: 0.0,
                        vx: 0.0,
                        vy: 0.0,
                        vz: 0.0,
                    });
                }
            }
        }
        Scene::new(tracks)
    }

    #[test]
    fn test_frame_count_follows_first_track() {
        let scene = scene_with_lengths(&[10, 10, 5]);
        assert_eq!(scene.frame_count(), 10);
    }

    #[test]
    fn test_short_track_freezes_at_last_sample() {
        let scene = scene_with_lengths(&[10, 10, 5]);

        // Frames 5..10: the third body stays at its index-4 position
        for k in 5..10 {
            let view = scene.frame(k);
            assert_eq!(view.bodies[2].x, 2004.0);
            // Its trail still ends at that same frozen sample
            assert_eq!(*view.bodies[2].trail_x.last().unwrap(), 2004.0);
        }
        // The long tracks keep moving
        assert_eq!(scene.frame(9).bodies[0].x, 9.0);
    }

    #[test]
    fn test_trail_window_length() {
        let scene = scene_with_lengths(&[250]);

        for k in [0, 1, 50, 99, 100, 150, 249] {
            let view = scene.frame(k);
            let trail = view.bodies[0].trail_x;
            assert_eq!(trail.len(), (k + 1).min(TRAIL_LEN), "frame {k}");
            // Window always ends at frame k's sample
            assert_eq!(*trail.last().unwrap(), k as f64);
        }
    }

    #[test]
    fn test_view_extent_margin() {
        let mut tracks = TrackSet::new();
        tracks.push(Sample {
            time: 0.0,
            id: 0,
            mass: 1.0,
            x: -200.0,
            y: 80.0,
            z: 0.0,
            vx: 0.0,
            vy: 0.0,
            vz: 0.0,
        });
        let scene = Scene::new(tracks);

        assert_eq!(scene.view_extent(), 230.0);
        // The extreme data point is strictly inside the view
        assert!(200.0 < scene.view_extent());
    }

    #[test]
    fn test_day_and_year_labels() {
        let scene = scene_with_lengths(&[400]);

        let view = scene.frame(365);
        let [day, year] = view.info_lines();
        assert_eq!(day, "Day: 365");
        assert_eq!(year, "Year: 1.00");

        assert_eq!(scene.frame(0).info_lines()[1], "Year: 0.00");
    }

    #[test]
    fn test_styles_fixed_at_load() {
        let mut tracks = TrackSet::new();
        tracks.push(Sample {
            time: 0.0,
            id: 6,
            mass: 1.989e30,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            vx: 0.0,
            vy: 0.0,
            vz: 0.0,
        });
        let scene = Scene::new(tracks);

        let style = scene.styles()[0];
        assert_eq!(style.class, BodyClass::Star);
        // id 6 aliases onto palette slot 0
        assert_eq!(style.color, crate::theme::colors::PALETTE[0]);
    }
}
