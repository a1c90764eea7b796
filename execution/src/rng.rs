//! Seeded randomness for shoes.
//!
//! Reproducibility contract: the master seed feeds `ChaCha20Rng::seed_from_u64`, and the
//! seed for shoe `i` (1-based) is the `i`-th `next_u64()` of that generator. Each shoe is
//! then shuffled by `ChaCha20Rng::seed_from_u64(shoe_seed)`. ChaCha is used instead of
//! `StdRng` because its output stream is fixed across `rand` releases.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Generator used for shuffling shoes and deriving shoe seeds.
pub type ShoeRng = ChaCha20Rng;

/// Seeded generator, or one seeded from OS entropy when `seed` is `None`.
pub fn shoe_rng(seed: Option<u64>) -> ShoeRng {
    match seed {
        Some(seed) => ShoeRng::seed_from_u64(seed),
        None => ShoeRng::from_entropy(),
    }
}

/// Derive one seed per shoe, in shoe order.
///
/// Seeds for the first `n` shoes do not depend on how many shoes follow them.
pub fn derive_shoe_seeds(master: Option<u64>, num_shoes: u32) -> Vec<u64> {
    let mut rng = shoe_rng(master);
    (0..num_shoes).map(|_| rng.next_u64()).collect()
}
