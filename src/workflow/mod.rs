pub mod catalog_flow;

pub use catalog_flow::{CatalogFlow, DeletionResult, QuestionListing};
