//! Static form registration markup
//!
//! The static host discovers forms by scanning deployed HTML for
//! `data-netlify` forms, so every schema also renders as a hidden form
//! whose inputs mirror the wire field names. Each input carries its
//! validation rules as a `data-validate` attribute for progressive
//! enhancement on the client.

use maud::{html, Markup};

use leadform::{FieldKind, FormSchema};

use crate::encode::format_field_name;

/// Renders the hidden registration form for one schema.
pub fn registration_markup(schema: &FormSchema) -> Markup {
    html! {
        @if schema.has_file_field() {
            form name=(schema.name()) data-netlify="true" enctype="multipart/form-data" hidden {
                (field_inputs(schema))
            }
        } @else {
            form name=(schema.name()) data-netlify="true" hidden {
                (field_inputs(schema))
            }
        }
    }
}

fn field_inputs(schema: &FormSchema) -> Markup {
    html! {
        input type="hidden" name="form-name" value=(schema.name());
        @for spec in schema.fields() {
            @if spec.kind() == &FieldKind::Textarea {
                textarea
                    name=(format_field_name(spec.name()))
                    data-validate=(spec.client_rules().to_string()) {}
            } @else {
                input
                    type=(spec.kind().input_type())
                    name=(format_field_name(spec.name()))
                    data-validate=(spec.client_rules().to_string());
            }
        }
    }
}
