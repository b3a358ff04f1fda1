//! Storage abstractions for service layer
//!
//! One generic in-memory store is instantiated per record type; handlers
//! only see it through the `EntityStore` trait.

pub mod entity_store;
pub mod memory_store;
