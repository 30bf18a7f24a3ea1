//! Coin flipping over an explicitly passed random source

use chrono::Utc;
use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};
use std::fmt;
use tracing::debug;

/// Outcome of a single flip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinFace {
    Heads,
    Tails,
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heads => f.write_str("Heads"),
            Self::Tails => f.write_str("Tails"),
        }
    }
}

/// Flip a fair coin once
pub fn flip(rng: &mut dyn RngCore) -> CoinFace {
    if rng.gen_bool(0.5) {
        CoinFace::Heads
    } else {
        CoinFace::Tails
    }
}

/// `times` independent flips
pub fn flips(rng: &mut dyn RngCore, times: usize) -> impl Iterator<Item = CoinFace> + '_ {
    (0..times).map(move |_| flip(&mut *rng))
}

/// Random source seeded from the wall clock
///
/// Called once per process by the binary; tests seed `StdRng` directly.
pub fn clock_seeded_rng() -> StdRng {
    let now = Utc::now();
    let seed = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp()) as u64;
    debug!(seed, "Seeding coin RNG from clock");
    StdRng::seed_from_u64(seed)
}
