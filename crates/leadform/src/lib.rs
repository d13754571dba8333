//! # leadform
//!
//! A schema-driven form engine for lead-generation forms. Forms are
//! declared once as a [`FormSchema`] (field names, kinds, defaults,
//! requiredness, gating), and a [`Form`] instance tracks per-field value,
//! touched, and error state through a pure event reducer.
//!
//! ## Quick Start
//!
//! ```rust
//! use leadform::{FieldSpec, Form, FormSchema};
//!
//! let schema = FormSchema::new(
//!     "Sign Up For Newsletter Form",
//!     vec![
//!         FieldSpec::text("name", "Name").required("Please enter your name"),
//!         FieldSpec::email("email", "Email").required("Please enter your email address"),
//!     ],
//! );
//!
//! let mut form = Form::new(schema);
//! form.set_text("name", "John Smith");
//! form.set_text("email", "john@mail.com");
//! assert!(form.is_valid());
//! ```
//!
//! Validation errors are data, not control flow: [`Form::errors`] returns a
//! map of field name to message, and whole-form validity is an empty map.
//! Binding an undeclared field name or storing a value of the wrong shape
//! is a programmer error and panics.

pub mod feedback;
pub mod form;
pub mod forms;
pub mod schema;
pub mod state;
pub mod value;
pub mod widgets;

pub use feedback::{FormPhase, ResultFeedback, SubmissionState};
pub use form::Form;
pub use schema::{FieldKind, FieldSpec, FormSchema};
pub use state::{reduce, FieldEvent, FieldState};
pub use value::{FieldValue, FileUpload};
pub use widgets::OTHER_OPTION;
