mod hash_table;
pub mod rng;

pub use hash_table::{HashTable, Iter};
pub use rng::{IndexSource, ReseedPolicy, Seed, SeededSource};

/// Number of buckets a `HashTable` gets by default
pub const TABLE_SIZE: usize = 200;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    /// Every index is taken `mod bucket_count`, so zero buckets can never hold a key
    #[error("Hash table needs at least one bucket, got: 0")]
    ZeroBuckets,
}
