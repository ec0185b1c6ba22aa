//! Configuration types shared across the chart UI.

use std::time::Duration;

use crate::transition::TRANSITION_DURATION;

// ─────────────────────────────────────────────────────────────────────────────
// ChartGeometry
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed logical geometry of the chart surface.
///
/// The canvas is 960×500 units with margins of 20/40/80/100 (top, right,
/// bottom, left), yielding a plot area of 820×400. The pixel origin is the
/// top-left corner, so the y range is inverted.
#[derive(Debug, Clone, Copy)]
pub struct ChartGeometry {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            canvas_width: 960.0,
            canvas_height: 500.0,
            margin_top: 20.0,
            margin_right: 40.0,
            margin_bottom: 80.0,
            margin_left: 100.0,
        }
    }
}

impl ChartGeometry {
    pub fn plot_width(&self) -> f64 {
        self.canvas_width - self.margin_left - self.margin_right
    }

    pub fn plot_height(&self) -> f64 {
        self.canvas_height - self.margin_top - self.margin_bottom
    }

    /// Pixel range for x scales: left edge to right edge.
    pub fn x_range(&self) -> (f64, f64) {
        (0.0, self.plot_width())
    }

    /// Pixel range for y scales, inverted (pixel origin is top-left).
    pub fn y_range(&self) -> (f64, f64) {
        (self.plot_height(), 0.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CensusPlotConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the chart window.
pub struct CensusPlotConfig {
    /// Native window title.
    pub title: String,
    /// Optional headline rendered in the top bar.
    pub headline: Option<String>,
    /// Chart surface geometry.
    pub geometry: ChartGeometry,
    /// Radius of the circular point markers, in pixels.
    pub marker_radius: f32,
    /// Length of the axis-switch animation.
    pub transition_duration: Duration,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for CensusPlotConfig {
    fn default() -> Self {
        Self {
            title: "Census Scatter".to_string(),
            headline: Some("State demographics".to_string()),
            geometry: ChartGeometry::default(),
            marker_radius: 20.0,
            transition_duration: TRANSITION_DURATION,
            native_options: None,
        }
    }
}
