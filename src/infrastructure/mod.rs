pub mod memory_store;
pub mod sqlite_store;
pub mod store;

pub use memory_store::MemoryStore;
pub use sqlite_store::SqliteStore;
pub use store::{seed_store, QuestionStore};
