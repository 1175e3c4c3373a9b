//! Persistent storage for the five record collections.

pub mod backend;
pub mod collection;

pub use backend::{FileStorage, MemoryStorage, Storage};
#[cfg(test)]
pub use backend::FailingStorage;
pub use collection::keys;
