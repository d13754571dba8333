use crate::schema::{FieldSpec, FormSchema};

/// The general contact form: name, email, subject, and a free-form
/// message.
pub fn message_us() -> FormSchema {
    FormSchema::new(
        "Message Us Form",
        vec![
            FieldSpec::text("name", "Name").required("Please enter your name"),
            FieldSpec::email("email", "Email").required("Please provide an email address"),
            FieldSpec::text("subject", "Subject").required("Please provide a subject"),
            FieldSpec::textarea("message", "Message").required("Please provide a message"),
        ],
    )
}
