//! The demographic fields a record carries and which of them can drive the
//! x-axis.

use crate::data::records::CensusRecord;

/// Axis title for the fixed y field.
pub const HEALTHCARE_AXIS_LABEL: &str = "Lacks Healthcare (%)";

/// Tooltip label for the fixed y field.
pub const HEALTHCARE_TOOLTIP_LABEL: &str = "Lacks Healthcare";

/// A demographic field that can be bound to the x-axis.
///
/// Exactly these two fields are wired to click handlers; the selection state
/// machine never holds anything else, so an invalid field name cannot occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XField {
    Poverty,
    Age,
}

impl XField {
    /// All selectable fields, in the order their labels are rendered.
    pub const ALL: &'static [XField] = &[XField::Poverty, XField::Age];

    /// The clickable axis label text.
    pub fn axis_label(&self) -> &'static str {
        match self {
            XField::Poverty => "Poverty (%)",
            XField::Age => "Age (Median)",
        }
    }

    /// The label used in the hover tooltip.
    pub fn tooltip_label(&self) -> &'static str {
        match self {
            XField::Poverty => "In Poverty (%)",
            XField::Age => "Age (Median)",
        }
    }

    /// The CSV column this field is read from.
    pub fn column(&self) -> &'static str {
        match self {
            XField::Poverty => "poverty",
            XField::Age => "age",
        }
    }

    /// Extract this field's value from a record.
    pub fn value(&self, record: &CensusRecord) -> f64 {
        match self {
            XField::Poverty => record.poverty,
            XField::Age => record.age,
        }
    }
}

impl Default for XField {
    fn default() -> Self {
        XField::Poverty
    }
}

impl std::fmt::Display for XField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}
