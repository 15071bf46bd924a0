//! String-keyed hash table with separate chaining.

mod macros;

pub mod hashmap;
pub mod linked_list;

pub use hashmap::{DEFAULT_BUCKET_SIZE, Djb2, HashTable, KeyHasher, Sip, TableError, djb2};
pub use linked_list::{List, Node};
