use std::{
    collections::{LinkedList, linked_list},
    fmt, io,
};

use log::{debug, error, trace};

use crate::{
    TABLE_SIZE, TableError,
    rng::{IndexSource, SeededSource},
};

type Bucket = LinkedList<String>;

/// Fixed size hash table of string keys.
///
/// Collisions are chained: every bucket is a list of the keys hashing to it,
/// kept in insertion order. Duplicates are stored as often as they are inserted.
#[derive(Debug)]
pub struct HashTable<S = SeededSource> {
    buckets: Vec<Bucket>,
    items: usize,
    source: S,
}

#[derive(Debug)]
pub struct Iter<'a> {
    buckets: &'a [Bucket],
    keys: linked_list::Iter<'a, String>,
    bucket_idx: usize,
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HashTable {
    /// Creates an empty table with `TABLE_SIZE` buckets, reseeding from the clock on every random rehash
    pub fn new() -> Self {
        Self::with_source(SeededSource::default())
    }

    /// Creates an empty table with `size` buckets
    pub fn with_buckets(size: usize) -> Result<Self, TableError> {
        Self::with_buckets_and_source(size, SeededSource::default())
    }
}

impl<S> HashTable<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            buckets: Self::empty_buckets(TABLE_SIZE),
            items: 0,
            source,
        }
    }

    pub fn with_buckets_and_source(size: usize, source: S) -> Result<Self, TableError> {
        if size == 0 {
            return Err(TableError::ZeroBuckets);
        }
        Ok(Self {
            buckets: Self::empty_buckets(size),
            items: 0,
            source,
        })
    }

    /// Number of keys stored, duplicates included
    pub fn len(&self) -> usize {
        self.items
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Returns the number of buckets, or "slots" of the hash table
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn bucket(&self, idx: usize) -> Option<&LinkedList<String>> {
        self.buckets.get(idx)
    }

    /// Bucket `key` lands in when inserted
    pub fn index_of(&self, key: &str) -> usize {
        Self::hash(key) % self.bucket_count()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Appends a copy of `key` to the tail of its bucket.
    /// Never rejects a key, and never grows the table.
    pub fn insert(&mut self, key: &str) {
        let i = self.index_of(key);
        trace!(target:"insert", "{key:?} -> bucket {i}");
        self.buckets[i].push_back(key.to_owned());
        self.items += 1;
    }

    /// Moves every key from bucket `i` to bucket `(i + 1) % bucket_count`.
    /// Applying it `bucket_count` times puts every key back where it started.
    pub fn rehash_list(&mut self) {
        debug!(target:"rehash_list", "shifting {} keys by one bucket", self.items);
        let size = self.bucket_count();
        self.buckets = Self::redistribute(std::mem::take(&mut self.buckets), |i| (i + 1) % size);
    }

    // [adapters]

    /// Iterates `(bucket index, key)` pairs in bucket order, then insertion order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: &self.buckets,
            // bucket_count is never 0
            keys: self.buckets[0].iter(),
            bucket_idx: 0,
        }
    }

    /// Writes one `Index {i}: {key}, ` line per key, followed by a blank separator
    pub fn write_to<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{self}")
    }

    /// Dumps the table to stdout
    pub fn print(&self) {
        let stdout = io::stdout();
        if let Err(e) = self.write_to(&mut stdout.lock()) {
            error!(target:"print", "failed to write table: {e}");
        }
    }

    // [private]

    fn empty_buckets(size: usize) -> Vec<Bucket> {
        let mut buckets = Vec::with_capacity(size);
        for _ in 0..size {
            buckets.push(LinkedList::new());
        }
        buckets
    }

    /// Builds a fresh bucket array, moving each key of `old[i]` into `next_index(i)`
    fn redistribute(old: Vec<Bucket>, mut next_index: impl FnMut(usize) -> usize) -> Vec<Bucket> {
        let mut buckets = Self::empty_buckets(old.len());
        for (i, bucket) in old.into_iter().enumerate() {
            for key in bucket {
                buckets[next_index(i)].push_back(key);
            }
        }
        buckets
    }

    fn hash(key: &str) -> usize {
        key.bytes().fold(0usize, |sum, b| sum.wrapping_add(b as usize))
    }
}

impl<S: IndexSource> HashTable<S> {
    /// Moves every key to a bucket drawn from the table's `IndexSource`,
    /// independent of its hash and of its current bucket.
    ///
    /// The source is told a rehash begins before the first draw. With the
    /// default source that reseeds from the clock, so two calls within the
    /// same second distribute keys the same way. Draws are taken
    /// `mod bucket_count`, whatever the source returns.
    pub fn rehash_random(&mut self) {
        debug!(target:"rehash_random", "redistributing {} keys", self.items);
        let size = self.bucket_count();
        let source = &mut self.source;
        source.begin_rehash();
        self.buckets = Self::redistribute(std::mem::take(&mut self.buckets), |_| {
            source.next_index(size) % size
        });
    }
}

impl<S> fmt::Display for HashTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.iter() {
            writeln!(f, "Index {i}: {key}, ")?;
        }
        write!(f, "\n\n")
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.keys.next() {
                Some(key) => return Some((self.bucket_idx, key.as_str())),
                None => {
                    if self.bucket_idx + 1 >= self.buckets.len() {
                        return None;
                    }
                    self.bucket_idx += 1;
                    self.keys = self.buckets[self.bucket_idx].iter();
                }
            }
        }
    }
}

impl<'a, S> IntoIterator for &'a HashTable<S> {
    type Item = (usize, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
