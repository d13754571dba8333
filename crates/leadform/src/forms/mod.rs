//! Built-in form definitions
//!
//! The three marketing-site forms, expressed as schema constructors.
//! Each returns a fresh [`FormSchema`](crate::schema::FormSchema) so
//! every view gets its own independent state.

mod business_plan;
mod message_us;
mod newsletter;

pub use business_plan::business_plan;
pub use message_us::message_us;
pub use newsletter::newsletter;
