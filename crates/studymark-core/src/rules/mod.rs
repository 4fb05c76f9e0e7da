pub mod structure;
pub mod validation;

pub use validation::{validate_corpus, validate_document};
