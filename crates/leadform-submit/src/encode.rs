//! Wire encoding of form values
//!
//! Field names go out as "Capitalized Words" derived from their
//! camelCase schema names, and every value becomes a string on the wire:
//! booleans as Yes/No, lists joined with ", ", an unchosen file as
//! "None". Forms with a file field encode as multipart so the file's
//! bytes travel as a binary part; everything else is urlencoded.

use leadform::{FieldValue, FileUpload, Form};

/// Turns a camelCase field name into spaced, capitalized words:
/// `businessPhoneNumber` becomes `Business Phone Number`. An uppercase
/// run after a lowercase character stays together (`planPDF` becomes
/// `Plan PDF`), but the first character never suppresses the break, so
/// `ABTest` becomes `A BTest`, the spelling the endpoint registers.
pub fn format_field_name(name: &str) -> String {
    let mut chars = name.chars();
    let first = match chars.next() {
        Some(first) => first,
        None => return String::new(),
    };

    let mut formatted = String::with_capacity(name.len() + 4);
    formatted.extend(first.to_uppercase());
    let mut last_was_uppercase = false;
    for ch in chars {
        // Characters without case (digits, symbols) count as uppercase,
        // matching how word boundaries fall in practice
        let is_uppercase = !ch.is_lowercase();
        if is_uppercase && !last_was_uppercase {
            formatted.push(' ');
        }
        formatted.push(ch);
        last_was_uppercase = is_uppercase;
    }
    formatted
}

/// The string a value becomes on the wire. A chosen file is the one value
/// this cannot express; it travels as a binary multipart part instead, and
/// asking for it as a string is a programmer error.
pub fn stringify_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => s.clone(),
        FieldValue::Bool(true) => "Yes".to_string(),
        FieldValue::Bool(false) => "No".to_string(),
        FieldValue::List(items) => items.join(", "),
        FieldValue::File(None) => "None".to_string(),
        FieldValue::File(Some(file)) => {
            panic!("file '{}' cannot be carried in a urlencoded payload", file.file_name)
        }
    }
}

/// One part of a multipart payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    pub data: PartData,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartData {
    Text(String),
    File(FileUpload),
}

/// An encoded submission, ready for a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// `application/x-www-form-urlencoded` key/value pairs, in field
    /// order. The first pair carries the form's registered name under the
    /// `form-data` key.
    UrlEncoded(Vec<(String, String)>),
    /// `multipart/form-data` parts, in field order. The first part
    /// carries the form's registered name under the `form-name` key.
    Multipart(Vec<Part>),
}

/// Encodes every field of the form, active or not; an inactive gated
/// field still went out in the original payloads, carrying its default.
pub fn encode_form(form: &Form) -> Payload {
    let schema = form.schema();
    if schema.has_file_field() {
        let mut parts = vec![Part {
            name: "form-name".to_string(),
            data: PartData::Text(schema.name().to_string()),
        }];
        for spec in schema.fields() {
            let name = format_field_name(spec.name());
            let data = match form.value(spec.name()) {
                FieldValue::File(Some(file)) => PartData::File(file.clone()),
                value => PartData::Text(stringify_value(value)),
            };
            parts.push(Part { name, data });
        }
        Payload::Multipart(parts)
    } else {
        let mut pairs = vec![("form-data".to_string(), schema.name().to_string())];
        for spec in schema.fields() {
            pairs.push((
                format_field_name(spec.name()),
                stringify_value(form.value(spec.name())),
            ));
        }
        Payload::UrlEncoded(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadform::forms::{business_plan, message_us};
    use leadform::OTHER_OPTION;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_field_name() {
        assert_eq!(format_field_name("name"), "Name");
        assert_eq!(format_field_name("firstName"), "First Name");
        assert_eq!(format_field_name("businessPhoneNumber"), "Business Phone Number");
        assert_eq!(format_field_name("planPDF"), "Plan PDF");
        assert_eq!(format_field_name("address2"), "Address 2");
        assert_eq!(format_field_name("ABTest"), "A BTest");
        assert_eq!(format_field_name(""), "");
    }

    #[test]
    fn test_stringify_values() {
        assert_eq!(stringify_value(&FieldValue::text("hello")), "hello");
        assert_eq!(stringify_value(&FieldValue::Bool(true)), "Yes");
        assert_eq!(stringify_value(&FieldValue::Bool(false)), "No");
        assert_eq!(
            stringify_value(&FieldValue::List(vec!["8(a)".into(), "WOSB".into()])),
            "8(a), WOSB"
        );
        assert_eq!(stringify_value(&FieldValue::List(vec![])), "");
        assert_eq!(stringify_value(&FieldValue::File(None)), "None");
    }

    #[test]
    fn test_urlencoded_form_leads_with_form_data() {
        let mut form = Form::new(message_us());
        form.set_text("name", "Jordan Smith");
        form.set_text("email", "jordan@example.com");
        form.set_text("subject", "Hello");
        form.set_text("message", "A question.");

        let payload = encode_form(&form);
        let Payload::UrlEncoded(pairs) = payload else {
            panic!("expected a urlencoded payload");
        };
        assert_eq!(
            pairs,
            vec![
                ("form-data".to_string(), "Message Us Form".to_string()),
                ("Name".to_string(), "Jordan Smith".to_string()),
                ("Email".to_string(), "jordan@example.com".to_string()),
                ("Subject".to_string(), "Hello".to_string()),
                ("Message".to_string(), "A question.".to_string()),
            ]
        );
    }

    #[test]
    fn test_multipart_form_carries_file_bytes_and_defaults() {
        let mut form = Form::new(business_plan());
        form.set_text("firstName", "Jordan");
        form.set_gate("hasFranchiseAgreement", true);
        form.set_file(
            "franchiseAgreement",
            Some(FileUpload::new("agreement.pdf", "application/pdf", vec![1, 2])),
        );
        form.set_gate("appliedForCertificationsInThePast", true);
        form.list_push("pastCertifications");
        form.list_update("pastCertifications", 0, "8(a)");
        form.select_option("businessStructure", OTHER_OPTION);
        form.set_other_text("businessStructure", "Cooperative");

        let payload = encode_form(&form);
        let Payload::Multipart(parts) = payload else {
            panic!("expected a multipart payload");
        };

        let find = |name: &str| {
            parts
                .iter()
                .find(|part| part.name == name)
                .unwrap_or_else(|| panic!("missing part '{}'", name))
        };

        assert_eq!(parts[0].name, "form-name");
        assert_eq!(parts[0].data, PartData::Text("Business Plan Form".to_string()));
        assert_eq!(find("First Name").data, PartData::Text("Jordan".to_string()));
        // Untouched fields still go out, as their wire defaults
        assert_eq!(find("Last Name").data, PartData::Text(String::new()));
        assert_eq!(
            find("Interested In Federal Contract Certification").data,
            PartData::Text("No".to_string())
        );
        assert_eq!(
            find("Has Franchise Agreement").data,
            PartData::Text("Yes".to_string())
        );
        assert_eq!(
            find("Past Certifications").data,
            PartData::Text("8(a)".to_string())
        );
        // The Other free text is the selection's effective value
        assert_eq!(
            find("Business Structure").data,
            PartData::Text("Cooperative".to_string())
        );
        assert_eq!(
            find("Franchise Agreement").data,
            PartData::File(FileUpload::new("agreement.pdf", "application/pdf", vec![1, 2]))
        );
    }

    #[test]
    fn test_unchosen_file_stringifies_as_none() {
        let form = Form::new(business_plan());
        let Payload::Multipart(parts) = encode_form(&form) else {
            panic!("expected a multipart payload");
        };
        let file_part = parts
            .iter()
            .find(|part| part.name == "Franchise Agreement")
            .unwrap();
        assert_eq!(file_part.data, PartData::Text("None".to_string()));
    }
}
