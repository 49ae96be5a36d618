//! Zobrist hashing of Go positions.
//!
//! A position hash is the XOR of one random key per (point, color) stone on
//! the board and one key for the side to move. Placing or removing a stone
//! and flipping the turn are each a single XOR.
//!
//! Keys are generated once from a fixed seed and shared by every game, so
//! equal positions hash equally across game instances and runs.

use std::sync::OnceLock;

use crate::bitset::Bitset;
use crate::board::Color;
use crate::constants::{MAX_POINTS, PIECE_COUNT, RANDOM_SEED};
use crate::point::Point;

/// Precomputed random keys for stones and side to move.
#[derive(Debug)]
pub struct ZobristHash {
    stones: [[u64; MAX_POINTS]; PIECE_COUNT],
    signs: [u64; PIECE_COUNT],
}

static TABLE: OnceLock<ZobristHash> = OnceLock::new();

impl ZobristHash {
    /// Build a key table from a seed.
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut stones = [[0u64; MAX_POINTS]; PIECE_COUNT];

        for keys in &mut stones {
            for key in keys.iter_mut() {
                *key = rng.u64(..);
            }
        }

        let signs = [rng.u64(..), rng.u64(..)];
        Self { stones, signs }
    }

    /// The process-wide key table.
    pub fn shared() -> &'static ZobristHash {
        TABLE.get_or_init(|| ZobristHash::with_seed(RANDOM_SEED))
    }

    /// Key of the given side to move.
    #[inline]
    pub fn sign(&self, color: Color) -> u64 {
        self.signs[color.index()]
    }

    /// Hash after adding a stone.
    #[inline]
    pub fn insert(&self, hash: u64, point: Point, color: Color) -> u64 {
        hash ^ self.stones[color.index()][point]
    }

    /// Hash after removing a stone.
    #[inline]
    pub fn remove(&self, hash: u64, point: Point, color: Color) -> u64 {
        hash ^ self.stones[color.index()][point]
    }

    /// Hash after the turn passes from `from` to the opponent.
    #[inline]
    pub fn switch(&self, hash: u64, from: Color) -> u64 {
        hash ^ self.sign(from) ^ self.sign(from.opponent())
    }

    /// Hash a whole position from scratch.
    pub fn compute(&self, planes: &[Bitset; PIECE_COUNT], to_move: Color) -> u64 {
        let mut hash = self.sign(to_move);
        for color in [Color::Black, Color::White] {
            for point in &planes[color.index()] {
                hash = self.insert(hash, point, color);
            }
        }
        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_keys() {
        let a = ZobristHash::with_seed(7);
        let b = ZobristHash::with_seed(7);
        assert_eq!(a.stones[1][42], b.stones[1][42]);
        assert_eq!(a.sign(Color::White), b.sign(Color::White));
        assert_ne!(a.sign(Color::Black), a.sign(Color::White));
    }

    #[test]
    fn test_incremental_matches_full() {
        let z = ZobristHash::shared();
        let mut planes = [Bitset::new(), Bitset::new()];
        let mut hash = z.compute(&planes, Color::Black);

        planes[0].insert(40);
        hash = z.insert(hash, 40, Color::Black);
        hash = z.switch(hash, Color::Black);
        assert_eq!(hash, z.compute(&planes, Color::White));

        planes[1].insert(41);
        hash = z.insert(hash, 41, Color::White);
        planes[0].remove(40);
        hash = z.remove(hash, 40, Color::Black);
        hash = z.switch(hash, Color::White);
        assert_eq!(hash, z.compute(&planes, Color::Black));
    }

    #[test]
    fn test_side_to_move_matters() {
        let z = ZobristHash::shared();
        let planes = [Bitset::new(), Bitset::new()];
        assert_ne!(
            z.compute(&planes, Color::Black),
            z.compute(&planes, Color::White)
        );
    }
}
