pub mod activities_repo;
pub mod activity_participants_repo;
pub mod memory_store;
pub mod schema;
pub mod sqlite_store;
pub mod store;

pub use memory_store::InMemoryActivityStore;
pub use sqlite_store::SqliteActivityStore;
pub use store::ActivityStore;
