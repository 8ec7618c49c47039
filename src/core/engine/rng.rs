//! The single seeded random source shared by every generator in a run.
//!
//! Same seed -> same inputs, as long as campaigns draw in the same order.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub type FuzzRng = ChaCha8Rng;

/// Create the run-wide RNG for a seed.
pub fn seeded_rng(seed: u64) -> FuzzRng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_deterministic_rng() {
        let mut rng1 = seeded_rng(1337);
        let mut rng2 = seeded_rng(1337);

        let vals1: Vec<i64> = (0..10).map(|_| rng1.gen_range(-1000..=1000)).collect();
        let vals2: Vec<i64> = (0..10).map(|_| rng2.gen_range(-1000..=1000)).collect();

        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_different_seeds_different_output() {
        let mut rng1 = seeded_rng(1337);
        let mut rng2 = seeded_rng(1338);

        let val1: u64 = rng1.gen_range(0..u64::MAX);
        let val2: u64 = rng2.gen_range(0..u64::MAX);

        assert_ne!(val1, val2);
    }
}
