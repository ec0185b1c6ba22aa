//! Linear domain-to-pixel scales.
//!
//! A [`LinearScale`] maps a data-domain interval onto a pixel interval. The
//! x-axis scale is rebuilt from the dataset on every selection change via
//! [`x_scale`], which pads the observed extent by fixed multiplicative
//! margins; the y-axis scale is fixed for the lifetime of the chart via
//! [`y_scale`]. Scales are plain `Copy` values: a selection change replaces
//! the old scale rather than mutating it.

use crate::data::fields::XField;
use crate::data::records::CensusRecord;

/// Multiplier applied to the observed minimum when padding the x domain.
pub const DOMAIN_PAD_MIN: f64 = 0.8;
/// Multiplier applied to the observed maximum when padding the x domain.
pub const DOMAIN_PAD_MAX: f64 = 1.2;

// ─────────────────────────────────────────────────────────────────────────────
// LinearScale
// ─────────────────────────────────────────────────────────────────────────────

/// A linear mapping from a data domain onto a pixel range.
///
/// The range may be inverted (`range.0 > range.1`); the y-axis uses
/// `(plot_height, 0.0)` because the chart's pixel origin is the top-left
/// corner.
///
/// ```
/// # use censusplot::scale::LinearScale;
/// let s = LinearScale::new((0.0, 10.0), (0.0, 100.0));
/// assert_eq!(s.apply(5.0), 50.0);
/// assert_eq!(s.invert(50.0), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to a pixel coordinate.
    ///
    /// A zero-span domain maps every value to the midpoint of the range
    /// (documented quirk of the degenerate case, not a failure).
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) * 0.5;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Map a pixel coordinate back to a domain value.
    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return (d0 + d1) * 0.5;
        }
        d0 + (pixel - r0) / span * (d1 - d0)
    }

    /// Interpolate the domain towards `other` (same range), for animated
    /// axis transitions. `t` is expected in `[0, 1]`.
    pub fn lerp_domain(&self, other: &LinearScale, t: f64) -> LinearScale {
        LinearScale {
            domain: (
                lerp(self.domain.0, other.domain.0, t),
                lerp(self.domain.1, other.domain.1, t),
            ),
            range: other.range,
        }
    }
}

pub(crate) fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

// ─────────────────────────────────────────────────────────────────────────────
// Scale builders
// ─────────────────────────────────────────────────────────────────────────────

/// Build the x-axis scale for the chosen field.
///
/// The domain is the field's observed extent padded by [`DOMAIN_PAD_MIN`] and
/// [`DOMAIN_PAD_MAX`]. Pure: the records are not mutated. Cells that failed
/// numeric coercion are NaN and never compare, so they drop out of the
/// extent and their marks map to NaN positions (rendered nowhere).
pub fn x_scale(records: &[CensusRecord], field: XField, range: (f64, f64)) -> LinearScale {
    let (min, max) = extent(records.iter().map(|r| field.value(r)));
    LinearScale::new((min * DOMAIN_PAD_MIN, max * DOMAIN_PAD_MAX), range)
}

/// Build the fixed y-axis scale: `[0, max(healthcare)]` onto `range`.
pub fn y_scale(records: &[CensusRecord], range: (f64, f64)) -> LinearScale {
    let (_, max) = extent(records.iter().map(|r| r.healthcare));
    LinearScale::new((0.0, max), range)
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    (min, max)
}
