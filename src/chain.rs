//! Chain and territory flood fills.
//!
//! Both fills use an explicit stack so that a region spanning the whole
//! 19x19 board cannot exhaust the call stack.

use crate::bitset::Bitset;
use crate::board::Color;
use crate::constants::PIECE_COUNT;
use crate::point::{BoardSize, Point, neighbors};

/// A connected group of stones and its liberties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain {
    pub stones: Bitset,
    pub liberties: Bitset,
}

impl Chain {
    /// Check if the chain has only one liberty.
    #[inline]
    pub fn is_in_atari(&self) -> bool {
        self.liberties.count() == 1
    }
}

/// Build the chain of `color` grown from `point`.
///
/// The point itself is always part of the chain, even when it is still
/// empty; this is how a stone is evaluated before it is placed.
pub fn chain(
    planes: &[Bitset; PIECE_COUNT],
    size: BoardSize,
    color: Color,
    point: Point,
) -> Chain {
    let own = &planes[color.index()];
    let rival = &planes[color.opponent().index()];
    let mut chain = Chain::default();
    let mut stack = vec![point];
    chain.stones.insert(point);

    while let Some(pt) = stack.pop() {
        for n in neighbors(size, pt) {
            if chain.stones.contains(n) {
                continue;
            }
            if own.contains(n) {
                chain.stones.insert(n);
                stack.push(n);
            } else if !rival.contains(n) {
                chain.liberties.insert(n);
            }
        }
    }

    chain
}

/// An empty region and how often each color borders it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Territory {
    /// Number of points in the region.
    pub points: usize,
    /// Border contacts per color. A stone is counted once per adjacent
    /// empty point, so only zero versus non-zero is meaningful.
    pub borders: [usize; PIECE_COUNT],
}

impl Territory {
    /// The color owning the region, if exactly one color borders it.
    pub fn owner(&self) -> Option<Color> {
        match (self.borders[Color::Black.index()], self.borders[Color::White.index()]) {
            (0, 0) => None,
            (_, 0) => Some(Color::Black),
            (0, _) => Some(Color::White),
            _ => None,
        }
    }
}

/// Flood the empty region containing `point`, marking it in `area`.
///
/// Points already in `area` are treated as visited, so one `area` set can be
/// shared across a whole board scan.
pub fn territory(
    planes: &[Bitset; PIECE_COUNT],
    size: BoardSize,
    point: Point,
    area: &mut Bitset,
) -> Territory {
    let black = &planes[Color::Black.index()];
    let white = &planes[Color::White.index()];
    let mut region = Territory::default();
    let mut stack = vec![point];
    area.insert(point);
    region.points += 1;

    while let Some(pt) = stack.pop() {
        for n in neighbors(size, pt) {
            if area.contains(n) {
                continue;
            }
            if black.contains(n) {
                region.borders[Color::Black.index()] += 1;
            } else if white.contains(n) {
                region.borders[Color::White.index()] += 1;
            } else {
                area.insert(n);
                region.points += 1;
                stack.push(n);
            }
        }
    }

    region
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GoBoard;

    fn planes(diagram: &str) -> ([Bitset; PIECE_COUNT], BoardSize) {
        let board: GoBoard = diagram.parse().unwrap();
        (board.position(), board.size())
    }

    #[test]
    fn test_single_stone_liberties() {
        let (p, size) = planes("9/9/9/9/4X4/9/9/9/9 b -");
        let c = chain(&p, size, Color::Black, 40);
        assert_eq!(c.stones.count(), 1);
        assert_eq!(c.liberties.iter().collect::<Vec<_>>(), vec![31, 39, 41, 49]);
        assert!(!c.is_in_atari());
    }

    #[test]
    fn test_chain_shares_liberties() {
        // Two black stones side by side with a white stone above one of them
        let (p, size) = planes("9/9/9/9/3XX4/3O5/9/9/9 b -");
        let c = chain(&p, size, Color::Black, 39);
        assert_eq!(c.stones.iter().collect::<Vec<_>>(), vec![39, 40]);
        // 30, 31 below, 38, 41 beside, 49 above; 48 is white
        assert_eq!(c.liberties.iter().collect::<Vec<_>>(), vec![30, 31, 38, 41, 49]);
    }

    #[test]
    fn test_chain_in_atari() {
        let (p, size) = planes("XOX6/O8/9/9/9/9/9/9/9 b -");
        let c = chain(&p, size, Color::Black, 0);
        assert!(c.liberties.is_empty());
        let w = chain(&p, size, Color::White, 1);
        assert!(w.is_in_atari());
        assert_eq!(w.liberties.iter().collect::<Vec<_>>(), vec![10]);
        let w = chain(&p, size, Color::White, 9);
        assert_eq!(w.liberties.count(), 2);
    }

    #[test]
    fn test_chain_from_empty_point() {
        let (p, size) = planes("1X7/X8/9/9/9/9/9/9/9 w -");
        let c = chain(&p, size, Color::Black, 0);
        assert_eq!(c.stones.iter().collect::<Vec<_>>(), vec![0, 1, 9]);
        assert!(!c.liberties.contains(0));
        let w = chain(&p, size, Color::White, 0);
        assert!(w.liberties.is_empty());
    }

    #[test]
    fn test_territory_owner() {
        let (p, size) = planes("1X7/X8/9/9/9/9/9/9/9 b -");
        let mut area = Bitset::new();
        let corner = territory(&p, size, 0, &mut area);
        assert_eq!(corner.points, 1);
        assert_eq!(corner.owner(), Some(Color::Black));

        let rest = territory(&p, size, 2, &mut area);
        assert_eq!(rest.points, 78);
        assert_eq!(rest.owner(), Some(Color::Black));
        assert_eq!(area.count(), 79);
    }

    #[test]
    fn test_territory_neutral_and_empty() {
        let (p, size) = planes("9/9/9/9/9/9/9/9/9 b -");
        let mut area = Bitset::new();
        let all = territory(&p, size, 40, &mut area);
        assert_eq!(all.points, 81);
        assert_eq!(all.owner(), None);

        let (p, size) = planes("1XO6/9/9/9/9/9/9/9/9 b -");
        let mut area = Bitset::new();
        let rest = territory(&p, size, 80, &mut area);
        assert_eq!(rest.owner(), None);
    }
}
