pub mod loaders;
pub mod question;

pub use loaders::{load_seed_catalog, SeedCatalog};
pub use question::{Category, CategoryScope, NewQuestion, Question};
