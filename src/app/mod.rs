//! Interactive playback window.
//!
//! eframe/egui viewer looping the same frames as the GIF export. The
//! egui event loop owns control until the user closes the window.

use std::time::{Duration, Instant};

use eframe::egui;
use egui_plot::{Line, MarkerShape, Plot, PlotPoints, Points};

use crate::scene::{BodyClass, Scene, FRAME_DELAY_MS, TITLE};
use crate::theme::{colors, dark_visuals};

const FRAME_INTERVAL: Duration = Duration::from_millis(FRAME_DELAY_MS as u64);

/// Open the viewer window and block until it is closed. Fails if no
/// display is available; the caller logs that and carries on.
pub fn run_viewer(scene: Scene) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(dark_visuals());
            Ok(Box::new(ViewerApp::new(scene)))
        }),
    )
}

/// Looping playback over a loaded scene.
pub struct ViewerApp {
    scene: Scene,
    frame: usize,
    playing: bool,
    last_advance: Instant,
}

impl ViewerApp {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            frame: 0,
            playing: true,
            last_advance: Instant::now(),
        }
    }

    fn advance(&mut self) {
        let frames = self.scene.frame_count();
        if self.playing && frames > 0 && self.last_advance.elapsed() >= FRAME_INTERVAL {
            // Loop like the GIF does
            self.frame = (self.frame + 1) % frames;
            self.last_advance = Instant::now();
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        let frames = self.scene.frame_count();

        ui.horizontal(|ui| {
            ui.heading(TITLE);
            ui.separator();

            if frames == 0 {
                ui.label("No frames loaded");
                return;
            }

            let toggle = if self.playing { "Pause" } else { "Play" };
            if ui.button(toggle).clicked() {
                self.playing = !self.playing;
            }

            ui.add(egui::Slider::new(&mut self.frame, 0..=frames - 1).text("frame"));

            let [day, year] = self.scene.frame(self.frame).info_lines();
            ui.label(format!("{day}   {year}"));
        });
    }

    fn render_plot(&self, ui: &mut egui::Ui) {
        let extent = match self.scene.view_extent() {
            e if e > 0.0 => e,
            _ => 1.0,
        };
        let view = self.scene.frame(self.frame);

        Plot::new("orbits")
            .data_aspect(1.0)
            .include_x(-extent)
            .include_x(extent)
            .include_y(-extent)
            .include_y(extent)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show_grid(true)
            .x_axis_label("X Position (m)")
            .y_axis_label("Y Position (m)")
            .label_formatter(|name, value| {
                if name.is_empty() {
                    format!("x={:.3e} y={:.3e}", value.x, value.y)
                } else {
                    format!("{name}\nx={:.3e} y={:.3e}", value.x, value.y)
                }
            })
            .show(ui, |plot_ui| {
                for body in &view.bodies {
                    let (r, g, b) = body.style.color;

                    if body.trail_x.len() >= 2 {
                        let points: PlotPoints = body
                            .trail_x
                            .iter()
                            .zip(body.trail_y)
                            .map(|(&x, &y)| [x, y])
                            .collect();
                        let trail =
                            egui::Color32::from_rgba_unmultiplied(r, g, b, colors::TRAIL_ALPHA);
                        plot_ui.line(Line::new(points).color(trail).width(1.5));
                    }

                    let shape = match body.style.class {
                        BodyClass::Star => MarkerShape::Asterisk,
                        _ => MarkerShape::Circle,
                    };
                    plot_ui.points(
                        Points::new(vec![[body.x, body.y]])
                            .shape(shape)
                            .radius(body.style.class.marker_size() / 2.0)
                            .color(egui::Color32::from_rgb(r, g, b))
                            .filled(true)
                            .name(format!("Body {}", body.style.id)),
                    );
                }
            });
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.render_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_plot(ui);
        });

        if self.playing {
            ctx.request_repaint_after(FRAME_INTERVAL);
        }
    }
}
