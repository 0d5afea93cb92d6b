//! Store implementations
//!
//! Real implementations of the storage traits: an in-memory store and a
//! JSON-file-backed store.

pub mod json_store;
pub mod memory_store;

#[cfg(test)]
mod tests;

// Re-export store implementations
pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
