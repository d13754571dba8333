use crate::schema::{FieldSpec, FormSchema};

/// The newsletter signup form: just a name and an email address.
pub fn newsletter() -> FormSchema {
    FormSchema::new(
        "Sign Up For Newsletter Form",
        vec![
            FieldSpec::text("name", "Name").required("Please enter your name"),
            FieldSpec::email("email", "Email").required("Please enter your email address"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Form;

    #[test]
    fn test_both_fields_required() {
        let mut form = Form::new(newsletter());
        form.force_validate();

        let errors = form.errors();
        assert_eq!(errors.get("name").map(String::as_str), Some("Please enter your name"));
        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("Please enter your email address")
        );
    }

    #[test]
    fn test_filled_form_is_valid() {
        let mut form = Form::new(newsletter());
        form.set_text("name", "Jordan Smith");
        form.set_text("email", "jordan@example.com");
        assert!(form.is_valid());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut form = Form::new(newsletter());
        form.set_text("name", "Jordan Smith");
        form.set_text("email", "jordan@");
        assert_eq!(
            form.errors().get("email").map(String::as_str),
            Some("Please provide a valid email address")
        );
    }
}
