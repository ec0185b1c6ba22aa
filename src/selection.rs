//! X-axis selection state machine.
//!
//! The chart has exactly one piece of mutable interaction state: which field
//! drives the x-axis. It is owned here and updated only through
//! [`AxisSelection::reduce`], so the click → rescale → animate cycle can be
//! exercised in tests without a live rendering surface.

use crate::data::fields::XField;

/// An interaction event fed to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisEvent {
    /// The user clicked the axis label associated with this field.
    LabelClicked(XField),
}

/// The effect of an accepted transition: the fields to animate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub from: XField,
    pub to: XField,
}

/// Tracks the field currently bound to the x-axis.
///
/// Initial state is [`XField::Poverty`]. There is no terminal state; the
/// machine runs for the lifetime of the window.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisSelection {
    current: XField,
}

impl AxisSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field currently driving the x-axis.
    pub fn current(&self) -> XField {
        self.current
    }

    /// Apply an event.
    ///
    /// Clicking the label of the already-active field is a no-op and returns
    /// `None`: no transition is triggered and the state is unchanged.
    /// Otherwise the state moves to the clicked field and the returned
    /// [`SelectionChange`] drives exactly one coordinated update cycle.
    pub fn reduce(&mut self, event: AxisEvent) -> Option<SelectionChange> {
        match event {
            AxisEvent::LabelClicked(field) => {
                if field == self.current {
                    return None;
                }
                let change = SelectionChange {
                    from: self.current,
                    to: field,
                };
                self.current = field;
                Some(change)
            }
        }
    }

    /// Whether `field`'s label should be marked active. Exactly one field
    /// satisfies this at any time.
    pub fn is_active(&self, field: XField) -> bool {
        self.current == field
    }
}
