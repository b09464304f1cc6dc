//! Randomness used by [`HashTable::rehash_random`](crate::HashTable::rehash_random).
//!
//! The table owns its source, so tests can swap in a fixed seed or a
//! hand written [`IndexSource`] instead of relying on the clock.

use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Hands out bucket indices for a random rehash
pub trait IndexSource {
    /// Called once at the start of every random rehash, before any index is drawn
    fn begin_rehash(&mut self);

    /// Returns an index in `0..bound`. `bound` is never 0.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// When a [`SeededSource`] reseeds its generator
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ReseedPolicy {
    /// Reseed at the start of every rehash.
    ///
    /// Combined with [`Seed::WallClockSecs`] two rehashes inside the same
    /// second draw the exact same sequence of indices.
    #[default]
    EveryRehash,
    /// Seed on the first rehash and keep drawing from that stream afterwards
    Once,
}

/// Where a [`SeededSource`] takes its seed from
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Seed {
    /// Seconds since the UNIX epoch, read at every reseed
    #[default]
    WallClockSecs,
    Fixed(u64),
}

impl Seed {
    pub fn current(&self) -> u64 {
        match self {
            Seed::Fixed(seed) => *seed,
            Seed::WallClockSecs => match SystemTime::now().duration_since(UNIX_EPOCH) {
                Ok(d) => d.as_secs(),
                Err(e) => {
                    warn!(target:"reseed", "clock before the UNIX epoch ({e}), seeding with 0");
                    0
                }
            },
        }
    }
}

/// [`IndexSource`] backed by [`StdRng`]
#[derive(Debug)]
pub struct SeededSource {
    rng: StdRng,
    seed: Seed,
    policy: ReseedPolicy,
    seeded: bool,
}

impl Default for SeededSource {
    fn default() -> Self {
        Self::new(Seed::default(), ReseedPolicy::default())
    }
}

impl SeededSource {
    pub fn new(seed: Seed, policy: ReseedPolicy) -> Self {
        Self {
            rng: StdRng::seed_from_u64(0),
            seed,
            policy,
            seeded: false,
        }
    }

    /// Shorthand for a fixed seed that is reapplied on every rehash
    pub fn fixed(seed: u64) -> Self {
        Self::new(Seed::Fixed(seed), ReseedPolicy::EveryRehash)
    }

    pub fn policy(&self) -> ReseedPolicy {
        self.policy
    }

    fn reseed(&mut self) {
        let seed = self.seed.current();
        debug!(target:"reseed", "seeding with {seed} ({:?})", self.policy);
        self.rng = StdRng::seed_from_u64(seed);
        self.seeded = true;
    }
}

impl IndexSource for SeededSource {
    fn begin_rehash(&mut self) {
        match self.policy {
            ReseedPolicy::EveryRehash => self.reseed(),
            ReseedPolicy::Once if !self.seeded => self.reseed(),
            ReseedPolicy::Once => {}
        }
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}
