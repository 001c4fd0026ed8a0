//! Storage implementations for records and sessions

pub mod file;
pub mod in_memory;

pub use file::FileSessionStorage;
pub use in_memory::{InMemoryRecordStore, InMemorySessionStorage};
