//! Composite field operations
//!
//! Higher-order field patterns built on the plain field operations:
//! selection with a free-text "Other" fallback, and the expanding list of
//! text entries. The yes/no gate lives on [`Form`] itself
//! ([`Form::set_gate`]) since gating touches other fields' state.

use crate::form::Form;
use crate::schema::FieldKind;
use crate::state::FieldEvent;
use crate::value::FieldValue;

/// The sentinel option that reveals the free-text path of a
/// selection-with-other field.
pub const OTHER_OPTION: &str = "Other";

impl Form {
    fn selection_options(&self, field: &str) -> Vec<String> {
        match self.schema().expect(field).kind() {
            FieldKind::Selection { options, .. } => options.clone(),
            _ => panic!("field '{}' is not a selection field", field),
        }
    }

    fn selection_allows_other(&self, field: &str) -> bool {
        match self.schema().expect(field).kind() {
            FieldKind::Selection { allows_other, .. } => *allows_other,
            _ => panic!("field '{}' is not a selection field", field),
        }
    }

    /// Applies a choice made in a selection field. Choosing the `"Other"`
    /// sentinel clears the value and marks the field touched, so the
    /// free-text path is immediately validated as required; choosing a
    /// fixed option stores it. Any other choice is a programmer error.
    pub fn select_option(&mut self, field: &str, option: &str) {
        let options = self.selection_options(field);

        if option == OTHER_OPTION {
            if !self.selection_allows_other(field) {
                panic!("field '{}' does not allow an Other option", field);
            }
            self.change(field, FieldValue::text(""));
            self.apply(field, FieldEvent::ForceValidate);
            return;
        }

        if !options.iter().any(|candidate| candidate == option) {
            panic!("'{}' is not an option of field '{}'", option, field);
        }
        self.change(field, FieldValue::text(option));
        self.apply(field, FieldEvent::ForceValidate);
    }

    /// Edits the free-text value revealed by the `"Other"` option. The
    /// text becomes the field's effective value.
    pub fn set_other_text(&mut self, field: &str, text: impl Into<String>) {
        if !self.selection_allows_other(field) {
            panic!("field '{}' does not allow an Other option", field);
        }
        self.set_text(field, text);
    }

    /// Whether the free-text path is currently revealed: the field has
    /// been interacted with and its value is not one of the fixed
    /// options.
    pub fn selection_is_other(&self, field: &str) -> bool {
        let options = self.selection_options(field);
        let state = self.state(field);
        let value = state.value.as_text().unwrap_or_default();
        state.touched && !options.iter().any(|option| option == value)
    }

    fn edit_list(&mut self, field: &str, edit: impl FnOnce(&mut Vec<String>)) {
        if self.schema().expect(field).kind() != &FieldKind::TextList {
            panic!("field '{}' is not a list field", field);
        }
        let mut items = self.list(field).to_vec();
        edit(&mut items);
        self.change(field, FieldValue::List(items));
        self.apply(field, FieldEvent::ForceValidate);
    }

    /// Appends an empty entry to an expanding list.
    pub fn list_push(&mut self, field: &str) {
        self.edit_list(field, |items| items.push(String::new()));
    }

    /// Removes the entry at `index`; later entries shift down. Panics on
    /// an out-of-range index.
    pub fn list_remove(&mut self, field: &str, index: usize) {
        self.edit_list(field, |items| {
            items.remove(index);
        });
    }

    /// Replaces the entry at `index`. Panics on an out-of-range index.
    pub fn list_update(&mut self, field: &str, index: usize, text: impl Into<String>) {
        let text = text.into();
        self.edit_list(field, move |items| items[index] = text);
    }
}
