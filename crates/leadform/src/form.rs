//! The form controller
//!
//! A [`Form`] owns one schema and the live state of every field. All
//! mutation goes through named field operations that apply the pure
//! reducer, so a field's value and its derived error always move
//! together. Accessing an undeclared field panics; validation errors are
//! returned as data.

use std::collections::HashMap;

use leadform_validation::{is_valid_email, is_valid_phone};

use crate::schema::{FieldKind, FieldSpec, FormSchema};
use crate::state::{reduce, FieldEvent, FieldState};
use crate::value::{FieldValue, FileUpload};

/// One live form instance. Created fresh per view; discarded on
/// navigation or successful submission.
#[derive(Debug, Clone)]
pub struct Form {
    schema: FormSchema,
    states: HashMap<String, FieldState>,
}

impl Form {
    pub fn new(schema: FormSchema) -> Self {
        let states = schema
            .fields()
            .iter()
            .map(|spec| (spec.name().to_string(), FieldState::fresh(spec)))
            .collect();
        Self { schema, states }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// The current state of a field. Panics for an undeclared name.
    pub fn state(&self, field: &str) -> &FieldState {
        self.schema.expect(field);
        &self.states[field]
    }

    pub fn value(&self, field: &str) -> &FieldValue {
        &self.state(field).value
    }

    /// The text content of a text-backed field. Panics if the field holds
    /// a different value shape.
    pub fn text(&self, field: &str) -> &str {
        match self.value(field).as_text() {
            Some(s) => s,
            None => panic!("field '{}' does not hold text", field),
        }
    }

    pub fn bool_value(&self, field: &str) -> bool {
        match self.value(field).as_bool() {
            Some(b) => b,
            None => panic!("field '{}' is not a boolean field", field),
        }
    }

    pub fn list(&self, field: &str) -> &[String] {
        match self.value(field).as_list() {
            Some(items) => items,
            None => panic!("field '{}' is not a list field", field),
        }
    }

    pub fn file(&self, field: &str) -> Option<&FileUpload> {
        match self.value(field) {
            FieldValue::File(file) => file.as_ref(),
            _ => panic!("field '{}' is not a file field", field),
        }
    }

    pub(crate) fn apply(&mut self, field: &str, event: FieldEvent) {
        let spec = self.schema.expect(field);
        let next = reduce(spec, &self.states[field], event);
        self.states.insert(field.to_string(), next);
    }

    /// Updates a field's value. Setting a boolean gate to false also
    /// resets every field gated by it, so stale invalid state cannot
    /// block submission.
    pub fn change(&mut self, field: &str, value: FieldValue) {
        let clears_dependents = matches!(value, FieldValue::Bool(false));
        self.apply(field, FieldEvent::Change(value));
        if clears_dependents {
            self.reset_dependents_of(field);
        }
    }

    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.change(field, FieldValue::Text(value.into()));
    }

    pub fn set_file(&mut self, field: &str, file: Option<FileUpload>) {
        // Choosing (or clearing) a file also counts as interacting with
        // the field
        self.change(field, FieldValue::File(file));
        self.apply(field, FieldEvent::ForceValidate);
    }

    pub fn blur(&mut self, field: &str) {
        self.apply(field, FieldEvent::Blur);
    }

    /// Sets a yes/no field from its two mutually exclusive inputs. Marks
    /// the field touched; a `false` selection resets all dependents even
    /// if they held invalid values.
    pub fn set_gate(&mut self, field: &str, value: bool) {
        if self.schema.expect(field).kind() != &FieldKind::Boolean {
            panic!("field '{}' is not a boolean field", field);
        }
        self.change(field, FieldValue::Bool(value));
        self.apply(field, FieldEvent::ForceValidate);
    }

    fn reset_dependents_of(&mut self, gate: &str) {
        let dependents: Vec<(String, FieldState)> = self
            .schema
            .fields()
            .iter()
            .filter(|spec| spec.gate() == Some(gate))
            .map(|spec| (spec.name().to_string(), FieldState::fresh(spec)))
            .collect();
        for (name, fresh) in dependents {
            self.states.insert(name, fresh);
        }
    }

    /// Whether the field participates in validation: true when it has no
    /// gate, or its gate holds `true`.
    pub fn is_active(&self, field: &str) -> bool {
        match self.schema.expect(field).gate() {
            Some(gate) => self.bool_value(gate),
            None => true,
        }
    }

    /// Forces validation of every active field, marking them all touched.
    pub fn force_validate(&mut self) {
        let names: Vec<String> = self
            .schema
            .fields()
            .iter()
            .map(|spec| spec.name().to_string())
            .collect();
        for name in names {
            if self.is_active(&name) {
                self.apply(&name, FieldEvent::ForceValidate);
            }
        }
    }

    /// Validates every active field and returns the error map. All fields
    /// are always checked; there is no early exit across fields.
    pub fn errors(&self) -> HashMap<String, String> {
        let mut errors = HashMap::new();
        for spec in self.schema.fields() {
            if !self.is_active(spec.name()) {
                continue;
            }
            if let Some(message) = spec.validate(&self.states[spec.name()].value) {
                errors.insert(spec.name().to_string(), message);
            }
        }
        errors
    }

    /// Whole-form validity: an empty error map.
    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Visual "valid" feedback. True when the field is touched and
    /// error-free, or when a live format check passes even before touch
    /// (phone and email fields give faster positive feedback this way).
    pub fn display_valid(&self, field: &str) -> bool {
        let spec = self.schema.expect(field);
        let state = &self.states[field];

        let live_override = match (spec.kind(), &state.value) {
            (FieldKind::Email, FieldValue::Text(s)) => is_valid_email(s),
            (FieldKind::Tel, FieldValue::Text(s)) => is_valid_phone(s),
            (FieldKind::Selection { options, .. }, FieldValue::Text(s)) => {
                options.iter().any(|option| option == s)
            }
            (FieldKind::File { .. }, FieldValue::File(file)) => {
                return file.is_some() && state.touched && state.error.is_none();
            }
            _ => false,
        };

        live_override || (state.touched && state.error.is_none())
    }

    /// Visual "invalid" feedback: only once the field is touched and an
    /// error exists.
    pub fn display_invalid(&self, field: &str) -> bool {
        let state = self.state(field);
        state.touched && state.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSpec;
    use pretty_assertions::assert_eq;

    fn gated_schema() -> FormSchema {
        FormSchema::new(
            "Test Form",
            vec![
                FieldSpec::text("name", "Name").required("Please enter your name"),
                FieldSpec::boolean("hasFranchiseAgreement", "Has a franchise agreement?"),
                FieldSpec::file(
                    "franchiseAgreement",
                    "Franchise Agreement",
                    Some("application/pdf"),
                )
                .required("Please attach your franchise agreement")
                .gated_by("hasFranchiseAgreement"),
            ],
        )
    }

    #[test]
    fn test_fresh_form_has_defaults() {
        let form = Form::new(gated_schema());
        assert_eq!(form.text("name"), "");
        assert!(!form.bool_value("hasFranchiseAgreement"));
        assert!(form.file("franchiseAgreement").is_none());
    }

    #[test]
    fn test_update_touches_exactly_one_field() {
        let mut form = Form::new(gated_schema());
        form.set_text("name", "John");
        assert_eq!(form.text("name"), "John");
        assert!(!form.state("name").touched);
        assert!(!form.state("hasFranchiseAgreement").touched);
    }

    #[test]
    fn test_inactive_field_excluded_from_errors() {
        let form = Form::new(gated_schema());
        let errors = form.errors();
        // Gate is off, so the required file does not count against the form
        assert!(!errors.contains_key("franchiseAgreement"));
        assert!(errors.contains_key("name"));
    }

    #[test]
    fn test_gate_on_requires_dependent() {
        let mut form = Form::new(gated_schema());
        form.set_text("name", "John");
        form.set_gate("hasFranchiseAgreement", true);

        let errors = form.errors();
        assert_eq!(
            errors.get("franchiseAgreement").map(String::as_str),
            Some("Please attach your franchise agreement")
        );

        form.set_file(
            "franchiseAgreement",
            Some(FileUpload::new("a.pdf", "application/pdf", vec![1])),
        );
        assert!(form.is_valid());
    }

    #[test]
    fn test_gate_off_clears_dependent_value_and_error() {
        let mut form = Form::new(gated_schema());
        form.set_text("name", "John");
        form.set_gate("hasFranchiseAgreement", true);

        // Leave the dependent invalid and touched
        form.blur("franchiseAgreement");
        assert!(form.state("franchiseAgreement").error.is_some());

        form.set_gate("hasFranchiseAgreement", false);
        let state = form.state("franchiseAgreement");
        assert_eq!(state.value, FieldValue::File(None));
        assert!(!state.touched);
        assert_eq!(state.error, None);
        assert!(form.is_valid());
    }

    #[test]
    fn test_gate_off_clears_chosen_file() {
        let mut form = Form::new(gated_schema());
        form.set_gate("hasFranchiseAgreement", true);
        form.set_file(
            "franchiseAgreement",
            Some(FileUpload::new("a.pdf", "application/pdf", vec![1])),
        );
        assert!(form.file("franchiseAgreement").is_some());

        form.set_gate("hasFranchiseAgreement", false);
        assert!(form.file("franchiseAgreement").is_none());
    }

    #[test]
    fn test_force_validate_touches_active_fields() {
        let mut form = Form::new(gated_schema());
        form.force_validate();

        assert!(form.state("name").touched);
        assert!(form.display_invalid("name"));
        // Inactive dependent stays untouched
        assert!(!form.state("franchiseAgreement").touched);
    }

    #[test]
    fn test_live_valid_override_for_phone() {
        let schema = FormSchema::new(
            "Test Form",
            vec![FieldSpec::tel("phoneNumber", "Phone Number")
                .required("Please provide your phone number")],
        );
        let mut form = Form::new(schema);

        // Never blurred, but the live format check already passes
        form.set_text("phoneNumber", "(555) 123-4567");
        assert!(form.display_valid("phoneNumber"));
        assert!(!form.display_invalid("phoneNumber"));
    }

    #[test]
    #[should_panic(expected = "has no field named")]
    fn test_unknown_field_panics() {
        let mut form = Form::new(gated_schema());
        form.set_text("nickname", "J");
    }

    #[test]
    #[should_panic(expected = "does not hold text")]
    fn test_text_accessor_checks_shape() {
        let form = Form::new(gated_schema());
        form.text("hasFranchiseAgreement");
    }

    #[test]
    #[should_panic(expected = "cannot hold value")]
    fn test_change_checks_value_shape() {
        let mut form = Form::new(gated_schema());
        // Untouched field, but a mismatched shape still fails fast
        form.change("name", FieldValue::Bool(false));
    }
}
