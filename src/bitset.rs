//! Fixed-capacity bit planes.
//!
//! A [`Bitset`] holds one bit per board point for the largest supported
//! board. Smaller boards simply leave the high bits unused, so all three
//! board sizes share one type.

use crate::constants::PLANE_WORDS;

/// A set of point indices backed by `PLANE_WORDS` 64-bit words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitset {
    words: [u64; PLANE_WORDS],
}

impl Bitset {
    /// Number of indices a bitset can hold.
    pub const CAPACITY: usize = PLANE_WORDS * 64;

    /// Create an empty bitset.
    pub const fn new() -> Self {
        Self {
            words: [0; PLANE_WORDS],
        }
    }

    #[inline]
    pub fn insert(&mut self, index: usize) {
        debug_assert!(index < Self::CAPACITY);
        self.words[index / 64] |= 1u64 << (index % 64);
    }

    #[inline]
    pub fn remove(&mut self, index: usize) {
        debug_assert!(index < Self::CAPACITY);
        self.words[index / 64] &= !(1u64 << (index % 64));
    }

    #[inline]
    pub fn toggle(&mut self, index: usize) {
        debug_assert!(index < Self::CAPACITY);
        self.words[index / 64] ^= 1u64 << (index % 64);
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        debug_assert!(index < Self::CAPACITY);
        (self.words[index / 64] >> (index % 64)) & 1 == 1
    }

    /// Number of indices in the set.
    #[inline]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn clear(&mut self) {
        self.words = [0; PLANE_WORDS];
    }

    /// Check whether two sets share any index.
    pub fn intersects(&self, other: &Bitset) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(a, b)| a & b != 0)
    }

    /// Copy the raw words into `buffer` starting at `offset`.
    pub fn copy_to(&self, buffer: &mut [u64], offset: usize) {
        buffer[offset..offset + PLANE_WORDS].copy_from_slice(&self.words);
    }

    /// Overwrite this set with the raw words stored in `buffer` at `offset`.
    pub fn copy_from(&mut self, buffer: &[u64], offset: usize) {
        self.words
            .copy_from_slice(&buffer[offset..offset + PLANE_WORDS]);
    }

    /// Iterate over the indices in ascending order.
    pub fn iter(&self) -> BitsetIter {
        BitsetIter {
            words: self.words,
            word_idx: 0,
            current: self.words[0],
        }
    }
}

impl FromIterator<usize> for Bitset {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Bitset::new();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

impl<'a> IntoIterator for &'a Bitset {
    type Item = usize;
    type IntoIter = BitsetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the set indices of a [`Bitset`].
pub struct BitsetIter {
    words: [u64; PLANE_WORDS],
    word_idx: usize,
    current: u64,
}

impl Iterator for BitsetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            self.word_idx += 1;
            if self.word_idx >= PLANE_WORDS {
                return None;
            }
            self.current = self.words[self.word_idx];
        }

        let bit = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some(self.word_idx * 64 + bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_toggle() {
        let mut set = Bitset::new();
        assert!(set.is_empty());

        set.insert(0);
        set.insert(63);
        set.insert(64);
        set.insert(361);
        assert_eq!(set.count(), 4);
        assert!(set.contains(63) && set.contains(64));

        set.remove(63);
        assert!(!set.contains(63));
        set.toggle(64);
        assert!(!set.contains(64));
        set.toggle(64);
        assert!(set.contains(64));
        assert_eq!(set.count(), 3);
    }

    #[test]
    fn test_iter_ascending() {
        let set: Bitset = [300, 5, 127, 128, 0].into_iter().collect();
        let items: Vec<usize> = set.iter().collect();
        assert_eq!(items, vec![0, 5, 127, 128, 300]);
    }

    #[test]
    fn test_copy_to_and_from_buffer() {
        let set: Bitset = [1, 70, 200].into_iter().collect();
        let mut buffer = vec![0u64; PLANE_WORDS * 3];
        set.copy_to(&mut buffer, PLANE_WORDS);
        assert!(buffer[..PLANE_WORDS].iter().all(|&w| w == 0));

        let mut restored = Bitset::new();
        restored.insert(9);
        restored.copy_from(&buffer, PLANE_WORDS);
        assert_eq!(restored, set);
    }

    #[test]
    fn test_intersects() {
        let a: Bitset = [3, 99].into_iter().collect();
        let b: Bitset = [4, 99].into_iter().collect();
        let c: Bitset = [5].into_iter().collect();
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}
