//! Service layer for the record services.
//! - `storage` holds the generic keyed auto-id store and the trait handlers depend on.
//! - `records` defines the concrete record types and their seed data.
//! - `errors` is the error type store lookups return.

pub mod errors;
pub mod records;
pub mod storage;

pub use records::{product::Product, user::User, Record};
pub use storage::{entity_store::EntityStore, memory_store::MemoryStore};
