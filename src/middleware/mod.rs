pub mod content_type_validation;
pub mod error_handling;
pub mod request_id;

pub use content_type_validation::*;
pub use error_handling::*;
pub use request_id::*;
