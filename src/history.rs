//! Per-ply game history for fast undo.
//!
//! Every ply stores the last move, hash, ko point and generation cursor in
//! parallel arrays, and both bit planes in one flat word buffer. Undoing a
//! move copies a stored slice back into the live planes; nothing is freed,
//! the buffers only grow.

use crate::bitset::Bitset;
use crate::constants::{CAPACITY_INCREMENT, MAX_CAPACITY, PIECE_COUNT, PLANE_WORDS};
use crate::point::Point;

/// Words stored per ply (both planes).
const PLY_WORDS: usize = PLANE_WORDS * PIECE_COUNT;

/// Scalar state saved alongside the planes of one ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub last_move: Option<Point>,
    pub hash: u64,
    pub kopoint: Option<Point>,
    pub cursor: usize,
}

/// Growable stack of plies.
#[derive(Debug, Clone)]
pub struct History {
    capacity: usize,
    len: usize,
    moves: Vec<Option<Point>>,
    hashes: Vec<u64>,
    kopoints: Vec<Option<Point>>,
    cursors: Vec<usize>,
    states: Vec<u64>,
}

impl History {
    /// Create a history able to hold `capacity` plies before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_CAPACITY);
        Self {
            capacity,
            len: 0,
            moves: vec![None; capacity],
            hashes: vec![0; capacity],
            kopoints: vec![None; capacity],
            cursors: vec![0; capacity],
            states: vec![0; capacity * PLY_WORDS],
        }
    }

    /// Number of stored plies.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget every stored ply.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Grow the buffers so that at least `size` plies fit.
    ///
    /// Grows by at least `CAPACITY_INCREMENT` plies and never beyond
    /// `MAX_CAPACITY`. Stored plies are preserved.
    pub fn ensure_capacity(&mut self, size: usize) {
        if size <= self.capacity {
            return;
        }

        let size = size
            .max(self.capacity + CAPACITY_INCREMENT)
            .min(MAX_CAPACITY);

        self.moves.resize(size, None);
        self.hashes.resize(size, 0);
        self.kopoints.resize(size, None);
        self.cursors.resize(size, 0);
        self.states.resize(size * PLY_WORDS, 0);
        self.capacity = size;
    }

    /// Append a ply.
    ///
    /// # Panics
    ///
    /// Panics if the history already holds `MAX_CAPACITY` plies.
    pub fn push(&mut self, entry: Entry, planes: &[Bitset; PIECE_COUNT]) {
        let ply = self.len;
        self.ensure_capacity(ply + 1);
        assert!(
            ply < self.capacity,
            "game history exhausted: cannot store more than {MAX_CAPACITY} plies"
        );

        self.moves[ply] = entry.last_move;
        self.hashes[ply] = entry.hash;
        self.kopoints[ply] = entry.kopoint;
        self.cursors[ply] = entry.cursor;

        let offset = ply * PLY_WORDS;
        for (i, plane) in planes.iter().enumerate() {
            plane.copy_to(&mut self.states, offset + i * PLANE_WORDS);
        }

        self.len += 1;
    }

    /// Copy the planes of `ply` into `planes` and return its scalar state.
    pub fn restore(&self, ply: usize, planes: &mut [Bitset; PIECE_COUNT]) -> Entry {
        debug_assert!(ply < self.len);

        let offset = ply * PLY_WORDS;
        for (i, plane) in planes.iter_mut().enumerate() {
            plane.copy_from(&self.states, offset + i * PLANE_WORDS);
        }

        self.entry(ply)
    }

    /// Scalar state of a stored ply.
    #[inline]
    pub fn entry(&self, ply: usize) -> Entry {
        Entry {
            last_move: self.moves[ply],
            hash: self.hashes[ply],
            kopoint: self.kopoints[ply],
            cursor: self.cursors[ply],
        }
    }

    /// Drop the newest `count` plies.
    pub fn truncate(&mut self, count: usize) {
        debug_assert!(count <= self.len);
        self.len -= count;
    }

    /// Stored (last move, hash) pairs, newest first.
    pub fn moves_and_hashes(&self) -> impl Iterator<Item = (Option<Point>, u64)> + '_ {
        (0..self.len)
            .rev()
            .map(|ply| (self.moves[ply], self.hashes[ply]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> Entry {
        Entry {
            last_move: Some(n),
            hash: n as u64 * 31,
            kopoint: None,
            cursor: n,
        }
    }

    #[test]
    fn test_push_and_restore() {
        let mut history = History::with_capacity(4);
        let mut planes = [Bitset::new(), Bitset::new()];
        planes[0].insert(10);
        history.push(entry(1), &planes);
        planes[1].insert(20);
        history.push(entry(2), &planes);

        let mut live = [Bitset::new(), Bitset::new()];
        let e = history.restore(0, &mut live);
        assert_eq!(e, entry(1));
        assert!(live[0].contains(10) && !live[1].contains(20));

        let e = history.restore(1, &mut live);
        assert_eq!(e.hash, 62);
        assert!(live[1].contains(20));
    }

    #[test]
    fn test_growth_preserves_entries() {
        let mut history = History::with_capacity(2);
        let mut planes = [Bitset::new(), Bitset::new()];
        for n in 0..300 {
            planes[n % 2].insert(n);
            history.push(entry(n), &planes);
        }
        assert_eq!(history.len(), 300);
        assert!(history.capacity() >= 300);
        // Growth is by at least the increment, not one ply at a time
        assert_eq!(history.capacity(), 2 + CAPACITY_INCREMENT * 3);

        let mut live = [Bitset::new(), Bitset::new()];
        let e = history.restore(1, &mut live);
        assert_eq!(e, entry(1));
        assert_eq!(live[0].count() + live[1].count(), 2);
        assert_eq!(history.entry(299), entry(299));
    }

    #[test]
    fn test_truncate_and_iterate() {
        let mut history = History::with_capacity(8);
        let planes = [Bitset::new(), Bitset::new()];
        for n in 0..5 {
            history.push(entry(n), &planes);
        }
        history.truncate(2);
        assert_eq!(history.len(), 3);
        let moves: Vec<_> = history.moves_and_hashes().map(|(m, _)| m).collect();
        assert_eq!(moves, vec![Some(2), Some(1), Some(0)]);
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_clones_are_independent() {
        let mut a = History::with_capacity(4);
        let planes = [Bitset::new(), Bitset::new()];
        a.push(entry(7), &planes);
        let mut b = a.clone();
        b.truncate(1);
        b.push(entry(8), &planes);
        assert_eq!(a.entry(0), entry(7));
        assert_eq!(b.entry(0), entry(8));
    }
}
