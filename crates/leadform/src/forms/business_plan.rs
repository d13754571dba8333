use crate::schema::{FieldSpec, FormSchema};

fn options(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// The business plan intake form. Two yes/no gates reveal conditional
/// sections: past certifications (an expanding text list) and a
/// franchise agreement upload (PDF only).
pub fn business_plan() -> FormSchema {
    FormSchema::new(
        "Business Plan Form",
        vec![
            FieldSpec::text("firstName", "First Name").required("Please provide your first name"),
            FieldSpec::text("lastName", "Last Name").required("Please provide your last name"),
            FieldSpec::text("title", "Title").required("Please provide your title"),
            FieldSpec::tel("phoneNumber", "Phone Number")
                .required("Please provide your phone number"),
            FieldSpec::tel("businessPhoneNumber", "Business Phone Number")
                .required("Please provide your business phone number"),
            FieldSpec::email("email", "Email")
                .required("Please provide your business email address"),
            FieldSpec::text("businessName", "Business Name")
                .required("Please provide your business name"),
            FieldSpec::selection(
                "businessStructure",
                "Business Structure",
                options(&[
                    "C Corp",
                    "S Corp",
                    "LLC",
                    "LLP",
                    "General Partnership",
                    "Sole Proprietor",
                    "Nonprofit",
                ]),
                true,
            )
            .required("Please provide your business structure"),
            FieldSpec::selection(
                "businessStage",
                "Business Stage",
                options(&[
                    "Seed and Development",
                    "Startup",
                    "Growth and Establishment",
                    "Expansion",
                    "Maturity/Possibly in Need of Revamping",
                ]),
                true,
            )
            .required("Please provide your business stage"),
            FieldSpec::boolean(
                "interestedInFederalContractCertification",
                "Interested in federal contract certification?",
            ),
            FieldSpec::boolean(
                "appliedForCertificationsInThePast",
                "Applied for certifications in the past?",
            ),
            FieldSpec::text_list("pastCertifications", "Past Certifications")
                .required("Please provide your past certifications")
                .gated_by("appliedForCertificationsInThePast"),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Form;
    use crate::value::FileUpload;
    use crate::widgets::OTHER_OPTION;

    fn fill_base(form: &mut Form) {
        form.set_text("firstName", "Jordan");
        form.set_text("lastName", "Smith");
        form.set_text("title", "Owner");
        form.set_text("phoneNumber", "5551234567");
        form.set_text("businessPhoneNumber", "5559876543");
        form.set_text("email", "jordan@example.com");
        form.set_text("businessName", "Smith Consulting");
        form.select_option("businessStructure", "LLC");
        form.select_option("businessStage", "Startup");
    }

    #[test]
    fn test_base_fields_suffice_with_gates_off() {
        let mut form = Form::new(business_plan());
        fill_base(&mut form);
        assert!(form.is_valid());
    }

    #[test]
    fn test_certification_gate_requires_list() {
        let mut form = Form::new(business_plan());
        fill_base(&mut form);

        form.set_gate("appliedForCertificationsInThePast", true);
        assert_eq!(
            form.errors().get("pastCertifications").map(String::as_str),
            Some("Please provide your past certifications")
        );

        form.list_push("pastCertifications");
        form.list_update("pastCertifications", 0, "8(a)");
        assert!(form.is_valid());
    }

    #[test]
    fn test_franchise_gate_requires_pdf() {
        let mut form = Form::new(business_plan());
        fill_base(&mut form);

        form.set_gate("hasFranchiseAgreement", true);
        assert!(!form.is_valid());

        form.set_file(
            "franchiseAgreement",
            Some(FileUpload::new("agreement.txt", "text/plain", vec![1])),
        );
        assert_eq!(
            form.errors().get("franchiseAgreement").map(String::as_str),
            Some("File must be of type application/pdf")
        );

        form.set_file(
            "franchiseAgreement",
            Some(FileUpload::new("agreement.pdf", "application/pdf", vec![1])),
        );
        assert!(form.is_valid());
    }

    #[test]
    fn test_other_business_structure() {
        let mut form = Form::new(business_plan());
        fill_base(&mut form);

        form.select_option("businessStructure", OTHER_OPTION);
        assert!(!form.is_valid());

        form.set_other_text("businessStructure", "Cooperative");
        assert!(form.is_valid());
    }

    #[test]
    fn test_federal_certification_interest_is_optional() {
        let mut form = Form::new(business_plan());
        fill_base(&mut form);
        form.set_gate("interestedInFederalContractCertification", true);
        assert!(form.is_valid());
        form.set_gate("interestedInFederalContractCertification", false);
        assert!(form.is_valid());
    }
}
