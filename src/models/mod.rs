pub mod catalog;
pub mod inquiry;

pub use catalog::*;
pub use inquiry::{validate, FieldError, FieldIssue, Inquiry, ValidationError, INQUIRY_COLLECTION};
