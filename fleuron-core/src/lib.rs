pub mod repository;
pub mod validation;

pub use repository::OrderStore;
pub use validation::{finalize_draft, validate_draft, ValidationReport};
