//! Per-frame rendering: the plot, its marks and labels, hover tooltips, the
//! clickable axis labels, and the window snapshot flow.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use eframe::egui;
use egui::{Align2, Color32, RichText};
use egui_plot::{Plot, PlotBounds, PlotPoint, Points, Text};
use image::{Rgba, RgbaImage};

use crate::data::fields::{XField, HEALTHCARE_AXIS_LABEL};
use crate::selection::AxisEvent;
use crate::tooltip::tooltip_text;

use super::CensusPlotApp;

/// Fill color of the circular state markers.
const MARK_FILL: Color32 = Color32::from_rgb(137, 189, 211);

impl eframe::App for CensusPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.drop_finished_transition(now);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(headline) = self.config.headline.clone() {
                    ui.heading(headline);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button("🖼 Save PNG")
                        .on_hover_text("Save a snapshot of the window")
                        .clicked()
                    {
                        self.request_window_shot = true;
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                self.show_chart(ui, now);
                self.show_axis_labels(ui);
            });
        });

        // Keep frames coming while an axis switch is animating.
        if self.transition.is_some() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }

        self.handle_snapshot(ctx);
    }
}

impl CensusPlotApp {
    fn show_chart(&mut self, ui: &mut egui::Ui, now: Instant) {
        let geometry = self.config.geometry;
        let width = geometry.plot_width();
        let height = geometry.plot_height();

        let axis = self.axis_scale_at(now);
        let y_scale = self.y_scale;
        let positions: Vec<[f64; 2]> = self
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| self.mark_position(i, r, now))
            .collect();

        let plot = Plot::new("census_scatter")
            .width(width as f32)
            .height(height as f32)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_grid(false)
            .y_axis_label(HEALTHCARE_AXIS_LABEL)
            .x_axis_formatter(move |mark, _range| format_tick(axis.invert(mark.value), 1))
            .y_axis_formatter(move |mark, _range| {
                format_tick(y_scale.invert(height - mark.value), 0)
            });

        let marker_radius = self.config.marker_radius;
        let plot_response = plot.show(ui, |plot_ui| {
            // The plot works in the chart's pixel space; lock the view to it.
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([0.0, 0.0], [width, height]));
            plot_ui.points(
                Points::new("states", positions.clone())
                    .radius(marker_radius)
                    .color(MARK_FILL),
            );
            for (record, pos) in self.records.iter().zip(&positions) {
                let rich = RichText::new(&record.abbr)
                    .size(12.0)
                    .strong()
                    .color(Color32::WHITE);
                plot_ui.text(
                    Text::new(record.abbr.as_str(), PlotPoint::new(pos[0], pos[1]), rich)
                        .anchor(Align2::CENTER_CENTER),
                );
            }
        });

        // Hover: find the mark under the pointer (screen-space distance, so
        // the hit area matches the drawn circle).
        self.hovered = None;
        if let Some(pointer) = plot_response.response.hover_pos() {
            let transform = plot_response.transform;
            let mut best: Option<(usize, f32)> = None;
            for (i, pos) in positions.iter().enumerate() {
                let screen = transform.position_from_point(&PlotPoint::new(pos[0], pos[1]));
                let d2 = screen.distance_sq(pointer);
                if best.is_none_or(|(_, best_d2)| d2 < best_d2) {
                    best = Some((i, d2));
                }
            }
            if let Some((i, d2)) = best {
                if d2 <= marker_radius * marker_radius {
                    self.hovered = Some(i);
                }
            }
        }
        if let Some(i) = self.hovered {
            let text = tooltip_text(&self.records[i], self.selection.current());
            plot_response.response.clone().on_hover_ui_at_pointer(|ui| {
                ui.label(text);
            });
        }
    }

    /// The clickable x-axis labels under the plot. The active field's label
    /// renders strong, the rest weak; clicking an inactive label feeds the
    /// state machine.
    fn show_axis_labels(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        let mut clicked = None;
        for &field in XField::ALL {
            let text = if self.selection.is_active(field) {
                RichText::new(field.axis_label()).strong()
            } else {
                RichText::new(field.axis_label()).weak()
            };
            let resp = ui
                .add(egui::Label::new(text).sense(egui::Sense::click()))
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if resp.clicked() {
                clicked = Some(field);
            }
        }
        if let Some(field) = clicked {
            self.handle_event(AxisEvent::LabelClicked(field));
        }
    }

    /// Deferred window snapshot: request the screenshot after the UI is
    /// drawn, then pick up the resulting event and write a PNG.
    fn handle_snapshot(&mut self, ctx: &egui::Context) {
        if self.request_window_shot {
            self.request_window_shot = false;
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
        }

        if let Some(image) = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        }) {
            let default_name = format!(
                "census_scatter_{}.png",
                chrono::Local::now().format("%Y%m%d_%H%M%S")
            );
            if let Some(path) = rfd::FileDialog::new()
                .set_file_name(&default_name)
                .add_filter("PNG", &["png"])
                .save_file()
            {
                match save_png(&image, &path) {
                    Ok(()) => log::info!("saved snapshot to {}", path.display()),
                    Err(e) => log::warn!("failed to save snapshot: {e:#}"),
                }
            }
        }
    }
}

/// Blank out non-finite tick values (empty dataset or NaN-poisoned scales)
/// instead of printing "NaN" on the axis.
fn format_tick(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }
    format!("{:.*}", decimals, value)
}

fn save_png(image: &egui::ColorImage, path: &Path) -> anyhow::Result<()> {
    let [w, h] = image.size;
    let mut out = RgbaImage::new(w as u32, h as u32);
    for y in 0..h {
        for x in 0..w {
            let p = image.pixels[y * w + x];
            out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
        }
    }
    out.save(path)
        .with_context(|| format!("writing {}", path.display()))
}
