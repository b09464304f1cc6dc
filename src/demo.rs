//! Fixed demonstration sequence: fill a table, rehash it both ways and
//! report how long one more rehash of each kind takes.

use std::io::Write;

use collections::{HashTable, IndexSource};
use log::info;

use crate::{DemoError, timing::measure};

pub const KEYS: [&str; 5] = ["apple", "banana", "orange", "grape", "watermelon"];

/// Runs the demo on a fresh clock-seeded table
pub fn run<W: Write>(out: &mut W) -> Result<(), DemoError> {
    run_with(HashTable::new(), out)
}

pub fn run_with<S: IndexSource, W: Write>(
    mut table: HashTable<S>,
    out: &mut W,
) -> Result<(), DemoError> {
    for key in KEYS {
        table.insert(key);
    }
    info!("inserted {} keys into {} buckets", table.len(), table.bucket_count());

    writeln!(out, "Rehashing randomly...")?;
    table.rehash_random();
    table.write_to(out)?;

    writeln!(out, "Rehashing by list...")?;
    table.rehash_list();
    table.write_to(out)?;

    let ((), took) = measure(|| table.rehash_random());
    writeln!(out, "rehash_random() took {} microseconds", took.as_micros())?;

    let ((), took) = measure(|| table.rehash_list());
    writeln!(out, "rehash_list() took {} microseconds", took.as_micros())?;

    out.flush()?;
    Ok(())
}
