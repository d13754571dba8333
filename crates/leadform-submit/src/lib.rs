//! # leadform-submit
//!
//! Takes a validated [`Form`](leadform::Form) the rest of the way: encodes
//! its values into the endpoint's wire shape (urlencoded, or multipart
//! when a file field is present), posts them over a pluggable
//! [`Transport`], and resolves the attempt into a single completed
//! [`SubmissionState`](leadform::SubmissionState). Also renders the hidden
//! registration markup the static-host form endpoint scans at deploy time.

pub mod encode;
pub mod pipeline;
pub mod registry;
pub mod transport;

pub use encode::{encode_form, format_field_name, Part, PartData, Payload};
pub use pipeline::{FormSubmission, SubmitError};
pub use registry::registration_markup;
pub use transport::{HttpTransport, Transport, TransportError};
