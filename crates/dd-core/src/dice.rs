//! Dice pools
//!
//! Every contest in the dungeon is resolved by opposed pools of dice, and
//! only the highest face in a pool matters.

use crate::rng::GameRng;

/// Highest face a combat die can show.
///
/// Faces run 1..=5. The face range is baked into the combat tables: every
/// opposed-roll probability in the game assumes it.
pub const MAX_FACE: u8 = 5;

/// Roll `count` dice, returning each face.
pub fn roll(rng: &mut GameRng, count: u32) -> Vec<u8> {
    (0..count).map(|_| rng.rnd(MAX_FACE as u32) as u8).collect()
}

/// Roll `count` dice and keep only the best face.
///
/// An empty pool has a best face of 0, which loses every contest.
pub fn best_face(rng: &mut GameRng, count: u32) -> u8 {
    roll(rng, count).into_iter().max().unwrap_or(0)
}
