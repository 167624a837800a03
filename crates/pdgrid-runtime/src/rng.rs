//! Seeded randomness for starting moves and activation order.

use pdgrid_core::types::Move;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// The generator a model draws starting moves and activation orders from.
pub type ModelRng = ChaCha12Rng;

/// Create a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> ModelRng {
    ChaCha12Rng::seed_from_u64(seed)
}

/// Draw a move uniformly from {Cooperate, Defect}.
pub fn random_move<R: Rng + ?Sized>(rng: &mut R) -> Move {
    if rng.gen_bool(0.5) {
        Move::Cooperate
    } else {
        Move::Defect
    }
}
