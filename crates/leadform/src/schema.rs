//! Form schemas
//!
//! A [`FormSchema`] is an ordered list of [`FieldSpec`]s. The spec carries
//! everything the engine needs: the discriminated [`FieldKind`] (which
//! fixes the value shape and the HTML input type), requiredness with its
//! user-facing message, and an optional gate field that controls whether
//! the field participates in validation at all.

use serde_json::{json, Value as JsonValue};

use leadform_validation::{
    is_present, validate_date, validate_email, validate_file_present, validate_file_type,
    validate_phone, validate_required_text, validate_text_list, validate_url,
};

use crate::value::FieldValue;

/// An additional validator applied after the kind's built-in checks pass.
pub type CustomValidator = fn(&FieldValue) -> Option<String>;

/// What a field is, which fixes both the value shape it holds and how it
/// renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Textarea,
    Email,
    Tel,
    Date,
    Url,
    /// A file input; `accept` restricts the MIME type when set
    File { accept: Option<&'static str> },
    Boolean,
    /// Variable-length ordered list of text entries
    TextList,
    /// Fixed option list; `allows_other` adds a free-text fallback
    Selection {
        options: Vec<String>,
        allows_other: bool,
    },
}

impl FieldKind {
    /// The HTML input type used when declaring this field to the
    /// receiving platform.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Date => "date",
            FieldKind::Url => "url",
            FieldKind::File { .. } => "file",
            // Textarea, booleans, lists, and selections all register as
            // plain text inputs
            _ => "text",
        }
    }

    /// The value a field of this kind starts with.
    pub fn default_value(&self) -> FieldValue {
        match self {
            FieldKind::Boolean => FieldValue::Bool(false),
            FieldKind::TextList => FieldValue::List(Vec::new()),
            FieldKind::File { .. } => FieldValue::File(None),
            _ => FieldValue::Text(String::new()),
        }
    }

    /// Whether a value's shape matches this kind.
    pub fn holds(&self, value: &FieldValue) -> bool {
        match self {
            FieldKind::Boolean => matches!(value, FieldValue::Bool(_)),
            FieldKind::TextList => matches!(value, FieldValue::List(_)),
            FieldKind::File { .. } => matches!(value, FieldValue::File(_)),
            _ => matches!(value, FieldValue::Text(_)),
        }
    }
}

/// Declaration of a single form field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    label: String,
    kind: FieldKind,
    required: bool,
    required_message: String,
    gated_by: Option<String>,
    custom: Option<CustomValidator>,
}

impl FieldSpec {
    fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            required_message: String::new(),
            gated_by: None,
            custom: None,
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn textarea(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn tel(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Tel)
    }

    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub fn url(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Url)
    }

    pub fn file(
        name: impl Into<String>,
        label: impl Into<String>,
        accept: Option<&'static str>,
    ) -> Self {
        Self::new(name, label, FieldKind::File { accept })
    }

    pub fn boolean(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Boolean)
    }

    pub fn text_list(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::TextList)
    }

    pub fn selection(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<String>,
        allows_other: bool,
    ) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Selection {
                options,
                allows_other,
            },
        )
    }

    /// Marks the field required, with the message shown when it is empty.
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = true;
        self.required_message = message.into();
        self
    }

    /// Gates this field behind a boolean field: it only participates in
    /// validation while the gate holds `true`.
    pub fn gated_by(mut self, gate: impl Into<String>) -> Self {
        self.gated_by = Some(gate.into());
        self
    }

    /// Attaches an extra validator, run after the built-in checks pass.
    pub fn custom(mut self, validator: CustomValidator) -> Self {
        self.custom = Some(validator);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn gate(&self) -> Option<&str> {
        self.gated_by.as_deref()
    }

    /// Validates a value against this spec. Returns `None` when valid.
    ///
    /// Panics if the value's shape does not match the field's kind; that
    /// is a programmer error, not user input.
    pub fn validate(&self, value: &FieldValue) -> Option<String> {
        let builtin = match (&self.kind, value) {
            (FieldKind::Text | FieldKind::Textarea, FieldValue::Text(s)) => {
                if self.required {
                    validate_required_text(s, &self.required_message).err()
                } else {
                    None
                }
            }
            (FieldKind::Selection { .. }, FieldValue::Text(s)) => {
                if self.required {
                    validate_required_text(s, &self.required_message).err()
                } else {
                    None
                }
            }
            (FieldKind::Email, FieldValue::Text(s)) => {
                if !self.required && !is_present(s) {
                    None
                } else {
                    validate_email(s, &self.required_message).err()
                }
            }
            (FieldKind::Tel, FieldValue::Text(s)) => {
                if !self.required && !is_present(s) {
                    None
                } else {
                    validate_phone(s, &self.required_message).err()
                }
            }
            (FieldKind::Date, FieldValue::Text(s)) => {
                if !self.required && !is_present(s) {
                    None
                } else {
                    validate_date(s, &self.required_message).err()
                }
            }
            (FieldKind::Url, FieldValue::Text(s)) => {
                if !self.required && !is_present(s) {
                    None
                } else {
                    validate_url(s, &self.required_message).err()
                }
            }
            (FieldKind::File { accept }, FieldValue::File(file)) => {
                let presence = if self.required {
                    validate_file_present(file.is_some(), &self.required_message).err()
                } else {
                    None
                };
                presence.or_else(|| match (file, accept) {
                    (Some(file), Some(expected)) => {
                        validate_file_type(&file.content_type, expected).err()
                    }
                    _ => None,
                })
            }
            (FieldKind::Boolean, FieldValue::Bool(_)) => None,
            (FieldKind::TextList, FieldValue::List(items)) => {
                validate_text_list(items, self.required, &self.required_message).err()
            }
            (kind, value) => panic!(
                "field '{}' declared as {:?} cannot hold value {:?}",
                self.name, kind, value
            ),
        };
        builtin.or_else(|| self.custom.and_then(|validator| validator(value)))
    }

    /// The field's validation rules as JSON, embedded in the registration
    /// markup's `data-validate` attribute for client-side mirroring.
    pub fn client_rules(&self) -> JsonValue {
        let mut rules = json!({
            "type": self.kind.input_type(),
            "required": self.required,
        });
        if let FieldKind::File { accept: Some(accept) } = &self.kind {
            rules["accept"] = json!(accept);
        }
        rules
    }
}

/// An ordered set of field declarations plus the logical form name the
/// receiving platform knows the form by.
#[derive(Debug, Clone)]
pub struct FormSchema {
    name: String,
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Builds a schema, checking its internal consistency.
    ///
    /// Panics on duplicate field names, on a `gated_by` target that does
    /// not exist, or on a gate that is not a boolean field. These are
    /// declaration bugs and surface immediately.
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        let schema = Self {
            name: name.into(),
            fields,
        };
        for (index, spec) in schema.fields.iter().enumerate() {
            let duplicate = schema.fields[..index]
                .iter()
                .any(|other| other.name == spec.name);
            if duplicate {
                panic!("duplicate field '{}' in form '{}'", spec.name, schema.name);
            }
            if let Some(gate) = spec.gate() {
                match schema.get(gate) {
                    None => panic!(
                        "field '{}' is gated by undeclared field '{}'",
                        spec.name, gate
                    ),
                    Some(gate_spec) if gate_spec.kind != FieldKind::Boolean => panic!(
                        "field '{}' is gated by non-boolean field '{}'",
                        spec.name, gate
                    ),
                    Some(_) => {}
                }
            }
        }
        schema
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field declarations in order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Like [`FormSchema::get`], but panics for an undeclared name.
    /// Binding a component to a field the schema does not declare is a
    /// programmer error.
    pub fn expect(&self, name: &str) -> &FieldSpec {
        match self.get(name) {
            Some(spec) => spec,
            None => panic!("form '{}' has no field named '{}'", self.name, name),
        }
    }

    /// One default value per field, in schema order.
    pub fn default_values(&self) -> Vec<(String, FieldValue)> {
        self.fields
            .iter()
            .map(|spec| (spec.name.clone(), spec.kind.default_value()))
            .collect()
    }

    /// Whether any field is a file input, which forces multipart encoding.
    pub fn has_file_field(&self) -> bool {
        self.fields
            .iter()
            .any(|spec| matches!(spec.kind, FieldKind::File { .. }))
    }
}
