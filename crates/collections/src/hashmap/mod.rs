use thiserror::Error;

mod hash_table;
mod hasher;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A table needs at least one bucket
    #[error("Invalid capacity {capacity}, a table needs at least one bucket")]
    InvalidCapacity { capacity: usize },

    /// Removal of a key that is not stored, the table is left untouched
    #[error("Key not found: {key}")]
    KeyNotFound { key: String },
}

pub use hash_table::{DEFAULT_BUCKET_SIZE, HashTable};
pub use hasher::{Djb2, KeyHasher, Sip, djb2};
