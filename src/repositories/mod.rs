pub mod document_repo;
pub mod pg_document_repo;

pub use document_repo::*;
pub use pg_document_repo::*;
