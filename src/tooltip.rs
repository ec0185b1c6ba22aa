//! Hover popup content.
//!
//! Tooltip text is a pure function of the record and the current selection,
//! evaluated at hover time each frame. Deriving the text from live state
//! means there is no bind-time capture to refresh after an axis switch, so
//! the popup can never show a stale field label.

use crate::data::fields::{XField, HEALTHCARE_TOOLTIP_LABEL};
use crate::data::records::CensusRecord;

/// Build the popup text for a hovered mark: the state's full name, the
/// currently-selected x field, and the fixed healthcare line. Values are
/// printed as stored, with no extra rounding.
pub fn tooltip_text(record: &CensusRecord, x_field: XField) -> String {
    format!(
        "{}\n{}: {}\n{}: {}",
        record.state,
        x_field.tooltip_label(),
        x_field.value(record),
        HEALTHCARE_TOOLTIP_LABEL,
        record.healthcare,
    )
}
