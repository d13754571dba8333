//! Leadform Validation
//!
//! Pure validation functions and formatting transforms for form fields.
//! Every function here is synchronous and side-effect free; the form engine
//! composes them into per-field error messages.

pub mod collection;
pub mod date;
pub mod email;
pub mod file;
pub mod phone;
pub mod string;

// Re-export all validators
pub use collection::*;
pub use date::*;
pub use email::*;
pub use file::*;
pub use phone::*;
pub use string::*;
