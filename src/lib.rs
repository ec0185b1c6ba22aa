//! CensusPlot crate root: re-exports and module wiring.
//!
//! This crate renders an interactive scatter plot of census-style state
//! demographics (poverty, median age, healthcare access) using egui/eframe.
//! Clicking one of the x-axis labels re-scales the plot and animates every
//! mark to its new position.
//!
//! The implementation is split into cohesive modules:
//! - `data`: record types, CSV loading, and the selectable field enum
//! - `scale`: linear domain-to-pixel scales with the padded-domain builder
//! - `selection`: the x-axis selection state machine
//! - `transition`: timed interpolation of axis and mark positions
//! - `tooltip`: hover popup content
//! - `config`: shared configuration and chart geometry
//! - `app`: the eframe application and run helpers

pub mod app;
pub mod config;
pub mod data;
pub mod scale;
pub mod selection;
pub mod tooltip;
pub mod transition;

// Public re-exports for a compact external API
pub use app::{run_censusplot, CensusPlotApp};
pub use config::{CensusPlotConfig, ChartGeometry};
pub use data::fields::XField;
pub use data::records::{load_census_csv, load_census_reader, CensusRecord};
pub use scale::{x_scale, y_scale, LinearScale};
pub use selection::{AxisEvent, AxisSelection, SelectionChange};
pub use transition::Transition;
