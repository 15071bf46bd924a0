use std::hash::{DefaultHasher, Hasher};

/// Maps a string key onto a bucket
///
/// Implementations must be pure: the same key always hashes to the same value,
/// within a process and across runs.
pub trait KeyHasher {
    fn hash(&self, key: &str) -> u64;

    /// `hash(key) mod capacity`, always in `0..capacity`
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero
    fn bucket_index(&self, key: &str, capacity: usize) -> usize {
        // both operands are unsigned so the remainder is never negative,
        // and it is below `capacity` so it fits back into usize
        (self.hash(key) % capacity as u64) as usize
    }
}

/// Dan Bernstein's string hash, the default
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Djb2;

impl KeyHasher for Djb2 {
    fn hash(&self, key: &str) -> u64 {
        djb2(key)
    }
}

/// `h = h * 33 + byte`, starting from 5381, wrapping on overflow
pub fn djb2(key: &str) -> u64 {
    key.bytes()
        .fold(5381u64, |h, b| (h << 5).wrapping_add(h).wrapping_add(u64::from(b)))
}

/// SipHash through std's `DefaultHasher`
///
/// `DefaultHasher::default()` uses fixed keys, so unlike `RandomState` the
/// result is deterministic within a build of the std library. The algorithm
/// may change between Rust releases, prefer [`Djb2`] when placement has to
/// match across toolchains.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sip;

impl KeyHasher for Sip {
    fn hash(&self, key: &str) -> u64 {
        let mut h = DefaultHasher::default();
        h.write(key.as_bytes());
        h.finish()
    }
}
