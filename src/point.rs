//! Board sizes and point adjacency.
//!
//! Points are linear indices `row * side + col` with row 0 at the bottom of
//! the board. The index equal to the board area is the pass move.

use crate::notation::NotationError;

/// A point on the board, represented as a linear index.
pub type Point = usize;

/// One of the supported board sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardSize {
    Nine,
    Thirteen,
    Nineteen,
}

impl BoardSize {
    /// Number of intersections on one side.
    #[inline]
    pub const fn side(self) -> usize {
        match self {
            BoardSize::Nine => 9,
            BoardSize::Thirteen => 13,
            BoardSize::Nineteen => 19,
        }
    }

    /// Number of intersections on the board.
    #[inline]
    pub const fn area(self) -> usize {
        self.side() * self.side()
    }

    /// The pass (forfeit) pseudo-move for this size.
    #[inline]
    pub const fn pass(self) -> Point {
        self.area()
    }

    /// Star points (hoshi) used when printing the board.
    pub fn star_points(self) -> Vec<Point> {
        let side = self.side();
        let edge = if side == 9 { 2 } else { 3 };
        let (low, mid, high) = (edge, side / 2, side - 1 - edge);
        let lines: &[usize] = match self {
            BoardSize::Nineteen => &[low, mid, high],
            _ => &[low, high],
        };

        let mut points: Vec<Point> = lines
            .iter()
            .flat_map(|&row| lines.iter().map(move |&col| row * side + col))
            .collect();
        if self != BoardSize::Nineteen {
            points.push(mid * side + mid);
        }
        points.sort_unstable();
        points
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        BoardSize::Nineteen
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = NotationError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        match side {
            9 => Ok(BoardSize::Nine),
            13 => Ok(BoardSize::Thirteen),
            19 => Ok(BoardSize::Nineteen),
            other => Err(NotationError::UnsupportedSize(other)),
        }
    }
}

/// Orthogonal neighbors of a point, in the order south, west, east, north.
///
/// Directions that would leave the board are skipped.
pub fn neighbors(size: BoardSize, point: Point) -> Neighbors {
    let side = size.side();
    debug_assert!(point < size.area());

    let row = point / side;
    let col = point % side;
    let mut out = Neighbors {
        points: [0; 4],
        len: 0,
        pos: 0,
    };

    if row > 0 {
        out.push(point - side);
    }
    if col > 0 {
        out.push(point - 1);
    }
    if col + 1 < side {
        out.push(point + 1);
    }
    if row + 1 < side {
        out.push(point + side);
    }
    out
}

/// Iterator over up to four adjacent points.
#[derive(Debug, Clone)]
pub struct Neighbors {
    points: [Point; 4],
    len: usize,
    pos: usize,
}

impl Neighbors {
    #[inline]
    fn push(&mut self, point: Point) {
        self.points[self.len] = point;
        self.len += 1;
    }
}

impl Iterator for Neighbors {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.pos < self.len {
            self.pos += 1;
            Some(self.points[self.pos - 1])
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.len - self.pos;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Neighbors {}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: [BoardSize; 3] = [BoardSize::Nine, BoardSize::Thirteen, BoardSize::Nineteen];

    #[test]
    fn test_corner_and_edge_counts() {
        for size in SIZES {
            let side = size.side();
            assert_eq!(neighbors(size, 0).len(), 2);
            assert_eq!(neighbors(size, side - 1).len(), 2);
            assert_eq!(neighbors(size, size.area() - 1).len(), 2);
            assert_eq!(neighbors(size, 1).len(), 3);
            assert_eq!(neighbors(size, side + 1).len(), 4);
        }
    }

    #[test]
    fn test_no_wraparound() {
        let size = BoardSize::Nine;
        // Last point of the first row must not touch the first point of the second
        let n: Vec<Point> = neighbors(size, 8).collect();
        assert_eq!(n, vec![7, 17]);
        let n: Vec<Point> = neighbors(size, 9).collect();
        assert_eq!(n, vec![0, 10, 18]);
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        for size in SIZES {
            for p in 0..size.area() {
                for q in neighbors(size, p) {
                    assert!(neighbors(size, q).any(|r| r == p), "{p} <-> {q}");
                }
            }
        }
    }

    #[test]
    fn test_try_from() {
        assert_eq!(BoardSize::try_from(13).unwrap(), BoardSize::Thirteen);
        assert!(BoardSize::try_from(15).is_err());
        assert_eq!(BoardSize::default().pass(), 361);
    }

    #[test]
    fn test_star_points() {
        assert_eq!(BoardSize::Nine.star_points(), vec![20, 24, 40, 56, 60]);
        assert_eq!(BoardSize::Nineteen.star_points().len(), 9);
        assert!(BoardSize::Nineteen.star_points().contains(&180));
    }
}
