//! Area scoring (Chinese rules).
//!
//! Each player scores one point per stone on the board plus one point per
//! empty intersection in a region bordered only by that player's stones.
//! Regions touching both colors, or none, are neutral.

use crate::bitset::Bitset;
use crate::board::Color;
use crate::chain::territory;
use crate::constants::PIECE_COUNT;
use crate::point::BoardSize;

/// Area score of each color, indexed by [`Color::index`].
pub fn compute_scores(planes: &[Bitset; PIECE_COUNT], size: BoardSize) -> [usize; PIECE_COUNT] {
    let mut scores = [
        planes[Color::Black.index()].count(),
        planes[Color::White.index()].count(),
    ];
    let mut area = Bitset::new();

    for point in 0..size.area() {
        if area.contains(point) || planes.iter().any(|p| p.contains(point)) {
            continue;
        }

        let region = territory(planes, size, point, &mut area);
        if let Some(owner) = region.owner() {
            scores[owner.index()] += region.points;
        }
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GoBoard;

    fn scores(diagram: &str) -> [usize; PIECE_COUNT] {
        let board: GoBoard = diagram.parse().unwrap();
        compute_scores(&board.position(), board.size())
    }

    #[test]
    fn test_empty_board_is_neutral() {
        assert_eq!(scores("9/9/9/9/9/9/9/9/9 b -"), [0, 0]);
    }

    #[test]
    fn test_lone_stone_owns_board() {
        assert_eq!(scores("9/9/9/9/4X4/9/9/9/9 w -"), [81, 0]);
    }

    #[test]
    fn test_split_board() {
        // A black wall on row 3 and a white wall on row 6
        assert_eq!(
            scores("9/9/XXXXXXXXX/9/9/OOOOOOOOO/9/9/9 b -"),
            [9 + 18, 9 + 27]
        );
    }

    #[test]
    fn test_regions_counted_once() {
        // One enclosed corner each, the shared middle is neutral
        let s = scores("1X7/X8/9/9/9/9/9/8O/7O1 b -");
        assert_eq!(s, [3, 3]);
    }
}
