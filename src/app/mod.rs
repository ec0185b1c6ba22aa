//! The chart application.
//!
//! Split into focused sub-modules:
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`update`] | Per-frame rendering: plot, marks, labels, hover, snapshot |
//! | [`run`]    | Top-level [`run_censusplot()`] entry point |
//!
//! [`CensusPlotApp`] owns all interaction state (current selection, current
//! scales, in-flight transition), so the click → rescale → animate cycle is
//! plain method calls on one value rather than a web of captured globals.

mod run;
mod update;

pub use run::run_censusplot;

use std::time::Instant;

use crate::config::CensusPlotConfig;
use crate::data::records::CensusRecord;
use crate::scale::{x_scale, y_scale, LinearScale};
use crate::selection::{AxisEvent, AxisSelection};
use crate::transition::{MarkTween, Transition};

/// The eframe application rendering the census scatter chart.
pub struct CensusPlotApp {
    /// The dataset, read-only after load.
    records: Vec<CensusRecord>,
    config: CensusPlotConfig,
    selection: AxisSelection,
    /// Target x scale for the current selection (the scale marks settle on).
    x_scale: LinearScale,
    /// Fixed for the lifetime of the chart.
    y_scale: LinearScale,
    /// In-flight axis switch, if any.
    transition: Option<Transition>,
    /// Index of the mark under the pointer this frame.
    hovered: Option<usize>,
    request_window_shot: bool,
}

impl CensusPlotApp {
    pub fn new(records: Vec<CensusRecord>, config: CensusPlotConfig) -> Self {
        let selection = AxisSelection::new();
        let x_scale = x_scale(&records, selection.current(), config.geometry.x_range());
        let y_scale = y_scale(&records, config.geometry.y_range());
        Self {
            records,
            config,
            selection,
            x_scale,
            y_scale,
            transition: None,
            hovered: None,
            request_window_shot: false,
        }
    }

    pub fn records(&self) -> &[CensusRecord] {
        &self.records
    }

    pub fn selection(&self) -> &AxisSelection {
        &self.selection
    }

    /// The x scale the chart is settling on (the in-flight transition's
    /// target, or the resting scale).
    pub fn current_x_scale(&self) -> LinearScale {
        self.x_scale
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Feed an interaction event through the selection state machine and,
    /// if it was accepted, run the coordinated update cycle: rebuild the x
    /// scale and start one transition covering the axis and every mark.
    ///
    /// A second switch while one is animating samples the in-flight
    /// positions as the new starting point (transition interrupt).
    pub fn handle_event(&mut self, event: AxisEvent) {
        let Some(change) = self.selection.reduce(event) else {
            return;
        };
        let now = Instant::now();
        let to = x_scale(&self.records, change.to, self.config.geometry.x_range());
        let from_scale = match &self.transition {
            Some(t) => t.axis_at(now),
            None => self.x_scale,
        };
        let marks: Vec<MarkTween> = self
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| MarkTween {
                from_x: match &self.transition {
                    Some(t) => t.mark_x_at(i, now),
                    None => self.x_scale.apply(change.from.value(r)),
                },
                to_x: to.apply(change.to.value(r)),
            })
            .collect();
        self.transition = Some(Transition::begin(
            from_scale,
            to,
            marks,
            self.config.transition_duration,
        ));
        self.x_scale = to;
    }

    /// The axis scale to draw at `now` (interpolated while animating).
    pub fn axis_scale_at(&self, now: Instant) -> LinearScale {
        match &self.transition {
            Some(t) => t.axis_at(now),
            None => self.x_scale,
        }
    }

    /// Plot-space position of the mark for `record` at `now`. Plot y grows
    /// upward while the scale's pixel y grows downward, hence the flip.
    pub fn mark_position(&self, index: usize, record: &CensusRecord, now: Instant) -> [f64; 2] {
        let x = match &self.transition {
            Some(t) => t.mark_x_at(index, now),
            None => self.x_scale.apply(self.selection.current().value(record)),
        };
        let y = self.y_scale.apply(record.healthcare);
        [x, self.config.geometry.plot_height() - y]
    }

    pub(crate) fn drop_finished_transition(&mut self, now: Instant) {
        if self.transition.as_ref().is_some_and(|t| t.finished_at(now)) {
            self.transition = None;
        }
    }
}
