//! Animated GIF export.
//!
//! Replays every scene frame into plotters' bitmap GIF backend at the
//! playback frame rate. Failures are returned to the caller and logged
//! there; they never abort the process.

use std::error::Error;
use std::f64::consts::{FRAC_PI_2, PI};
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{debug, info};

use crate::scene::{BodyClass, Scene, FRAME_DELAY_MS, TITLE};
use crate::theme::colors;

/// Fixed output path, relative to the working directory.
pub const GIF_PATH: &str = "orbit_animation.gif";

const WIDTH: u32 = 960;
const HEIGHT: u32 = 800;

fn rgb((r, g, b): (u8, u8, u8)) -> RGBColor {
    RGBColor(r, g, b)
}

/// Render the whole animation to a GIF at `path`, one frame per time
/// step, same frame count as the live view.
pub fn export_gif(scene: &Scene, path: &Path) -> Result<(), Box<dyn Error>> {
    let frames = scene.frame_count();
    if frames == 0 {
        info!("No frames to export, skipping GIF");
        return Ok(());
    }

    info!(
        path = %path.display(),
        frames,
        bodies = scene.body_count(),
        "Encoding animation"
    );

    let root = BitMapBackend::gif(path, (WIDTH, HEIGHT), FRAME_DELAY_MS)?.into_drawing_area();

    for k in 0..frames {
        draw_frame(&root, scene, k)?;
        root.present()?;

        if k % 100 == 0 {
            debug!(frame = k, total = frames, "Encoding frames");
        }
    }

    Ok(())
}

fn draw_frame(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    scene: &Scene,
    k: usize,
) -> Result<(), Box<dyn Error>> {
    let text = rgb(colors::TEXT);
    let extent = match scene.view_extent() {
        e if e > 0.0 => e,
        // Degenerate all-at-origin dataset still gets a drawable chart
        _ => 1.0,
    };

    root.fill(&rgb(colors::BG_FIGURE))?;

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, ("sans-serif", 28).into_font().color(&text))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    chart.plotting_area().fill(&rgb(colors::BG_PLOT))?;

    chart
        .configure_mesh()
        .x_desc("X Position (m)")
        .y_desc("Y Position (m)")
        .axis_style(text)
        .label_style(("sans-serif", 14).into_font().color(&text))
        .x_label_formatter(&|v| format!("{v:.1e}"))
        .y_label_formatter(&|v| format!("{v:.1e}"))
        .bold_line_style(rgb(colors::GRID).mix(0.3))
        .light_line_style(rgb(colors::GRID).mix(0.1))
        .draw()?;

    let view = scene.frame(k);

    for body in &view.bodies {
        let color = rgb(body.style.color);

        if body.trail_x.len() >= 2 {
            chart.draw_series(LineSeries::new(
                body.trail_x
                    .iter()
                    .zip(body.trail_y)
                    .map(|(&x, &y)| (x, y)),
                color.mix(0.5).stroke_width(2),
            ))?;
        }

        let size = body.style.class.marker_size() as f64;
        let series = match body.style.class {
            BodyClass::Star => chart.draw_series(std::iter::once(
                EmptyElement::at((body.x, body.y))
                    + Polygon::new(star_vertices(size), color.filled()),
            ))?,
            _ => chart.draw_series(std::iter::once(
                EmptyElement::at((body.x, body.y))
                    + Circle::new((0, 0), (size / 2.0).round() as i32, color.filled())
                    + Circle::new((0, 0), (size / 2.0).round() as i32, text.stroke_width(1)),
            ))?,
        };

        let id = body.style.id;
        series
            .label(format!("Body {id}"))
            .legend(move |(x, y)| Circle::new((x + 8, y), 5, color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(rgb(colors::BG_BOX).mix(0.9))
        .border_style(text)
        .label_font(("sans-serif", 15).into_font().color(&text))
        .draw()?;

    // Info box, bottom left, outside the chart's coordinate system
    let h = HEIGHT as i32;
    let font = ("sans-serif", 17).into_font().color(&text);
    let [day, year] = view.info_lines();
    root.draw(&Rectangle::new(
        [(14, h - 70), (140, h - 14)],
        rgb(colors::BG_BOX).mix(0.8).filled(),
    ))?;
    root.draw(&Text::new(day, (22, h - 62), font.clone()))?;
    root.draw(&Text::new(year, (22, h - 40), font))?;

    Ok(())
}

/// Pixel offsets of a five-pointed star, point up, relative to the
/// marker anchor.
fn star_vertices(radius: f64) -> Vec<(i32, i32)> {
    const SPOKES: usize = 5;
    (0..SPOKES * 2)
        .map(|i| {
            let r = if i % 2 == 0 { radius } else { radius * 0.45 };
            let angle = PI * i as f64 / SPOKES as f64 - FRAC_PI_2;
            (
                (r * angle.cos()).round() as i32,
                (r * angle.sin()).round() as i32,
            )
        })
        .collect()
}
