use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub type WalkRng = ChaCha8Rng;

/// Generator on stream 0. Instance generation draws from this stream.
pub fn seeded(seed: u64) -> WalkRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Private generator for one restart, on stream `restart + 1`. Restarts
/// never share a stream with each other or with `seeded(seed)`, so running
/// them in any order or on any thread gives the same draws.
pub fn restart_rng(seed: u64, restart: usize) -> WalkRng {
    let mut rng = seeded(seed);
    rng.set_stream(restart as u64 + 1);
    rng
}

/// Seed drawn from the OS when the caller gave none.
pub fn fresh_seed() -> u64 {
    rand::random::<u64>()
}

#[cfg(test)]
mod tests {
    use rand::RngCore;

    use super::*;

    fn head(mut rng: WalkRng) -> Vec<u64> {
        (0..4).map(|_| rng.next_u64()).collect()
    }

    #[test]
    fn restart_streams_differ_from_instance_stream() {
        for seed in [0, 42, u64::MAX] {
            let instance = head(seeded(seed));
            assert_ne!(head(restart_rng(seed, 0)), instance);
            assert_ne!(head(restart_rng(seed, 1)), instance);
            assert_ne!(head(restart_rng(seed, 0)), head(restart_rng(seed, 1)));
        }
    }

    #[test]
    fn restart_rng_is_reproducible() {
        assert_eq!(head(restart_rng(7, 3)), head(restart_rng(7, 3)));
    }
}
