use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::errors::EngineError;
use crate::value::Value;

/// A deterministic value generator addressed by row index.
///
/// Implementations must be pure in `(index, construction parameters)`: the
/// same factory asked for the same index always returns the same value.
/// Factories that look stateful (counters, date steppers) derive their output
/// arithmetically from the index instead of mutating internal state, which
/// keeps [`crate::Table::generate`] idempotent and rows safe to produce in
/// parallel.
pub trait Factory: Send + Sync {
    fn value(&self, index: u64) -> Result<Value, EngineError>;
}

/// Boxed factory handle stored in resolved columns.
pub type BoxFactory = Box<dyn Factory>;

/// Derive a child seed from a base seed and a string key.
pub fn mix_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

/// RNG for one row index, derived from a factory seed.
pub fn index_rng(seed: u64, index: u64) -> ChaCha8Rng {
    let mut hash = seed ^ index.wrapping_mul(0x9e3779b97f4a7c15);
    hash = hash.wrapping_mul(0x100000001b3);
    ChaCha8Rng::seed_from_u64(hash)
}
