//! Per-field state and the event reducer
//!
//! The field lifecycle is a pure function: `(spec, state, event) -> state`.
//! `touched` transitions false to true on first blur or forced validation
//! and never reverts; errors recompute on change only once touched, and
//! always on blur or forced validation.

use crate::schema::FieldSpec;
use crate::value::FieldValue;

/// The live state of one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    pub value: FieldValue,
    pub touched: bool,
    pub error: Option<String>,
}

impl FieldState {
    /// The state a field starts in: its kind's default value, untouched,
    /// error-free.
    pub fn fresh(spec: &FieldSpec) -> Self {
        Self {
            value: spec.kind().default_value(),
            touched: false,
            error: None,
        }
    }
}

/// An input event affecting one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// The field's value changed
    Change(FieldValue),
    /// The field lost focus
    Blur,
    /// Whole-form validation is being forced (e.g. on submit)
    ForceValidate,
}

/// Applies one event to a field's state.
///
/// Panics if a changed value's shape does not match the field's kind,
/// whether or not the field has been touched; a mismatch is a programmer
/// error, not pending validation.
pub fn reduce(spec: &FieldSpec, state: &FieldState, event: FieldEvent) -> FieldState {
    match event {
        FieldEvent::Change(value) => {
            if !spec.kind().holds(&value) {
                panic!(
                    "field '{}' declared as {:?} cannot hold value {:?}",
                    spec.name(),
                    spec.kind(),
                    value
                );
            }
            let error = if state.touched {
                spec.validate(&value)
            } else {
                // No error feedback while the field is still initially
                // focused
                None
            };
            FieldState {
                value,
                touched: state.touched,
                error,
            }
        }
        FieldEvent::Blur | FieldEvent::ForceValidate => FieldState {
            value: state.value.clone(),
            touched: true,
            error: spec.validate(&state.value),
        },
    }
}
