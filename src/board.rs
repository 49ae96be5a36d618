//! Board snapshots.
//!
//! A [`GoBoard`] is an immutable picture of a position: one bit plane per
//! color, the side to move, the forbidden ko point and the board size. Games
//! start from a board and export their current state as a new board.

use std::fmt;
use std::str::FromStr;

use crate::bitset::Bitset;
use crate::constants::{
    BLACK_SYMBOL, EMPTY_SYMBOL, NORTH, NORTH_SYMBOL, PIECE_COUNT, SOUTH, SOUTH_SYMBOL,
    STAR_SYMBOL, WHITE_SYMBOL,
};
use crate::notation::{self, NotationError, Occupants};
use crate::point::{BoardSize, Point};

/// Stone color. Also identifies the players: black moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    /// Index of this color's bit plane.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Turn identifier used by the search framework.
    #[inline]
    pub const fn turn(self) -> i32 {
        match self {
            Color::Black => SOUTH,
            Color::White => NORTH,
        }
    }

    /// Player for a turn identifier. Anything but `SOUTH` is white.
    #[inline]
    pub const fn from_turn(turn: i32) -> Color {
        if turn == SOUTH {
            Color::Black
        } else {
            Color::White
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Color::Black => BLACK_SYMBOL,
            Color::White => WHITE_SYMBOL,
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Color> {
        match symbol {
            BLACK_SYMBOL => Some(Color::Black),
            WHITE_SYMBOL => Some(Color::White),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

/// A position snapshot. Accessors hand out copies of the bit planes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoBoard {
    position: [Bitset; PIECE_COUNT],
    player: Color,
    kopoint: Option<Point>,
    size: BoardSize,
}

impl Default for GoBoard {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

impl GoBoard {
    /// Empty board with black to move.
    pub fn new(size: BoardSize) -> Self {
        Self::with_position([Bitset::new(); PIECE_COUNT], SOUTH, None, size)
    }

    pub fn with_position(
        position: [Bitset; PIECE_COUNT],
        turn: i32,
        kopoint: Option<Point>,
        size: BoardSize,
    ) -> Self {
        debug_assert!(!position[0].intersects(&position[1]));
        Self {
            position,
            player: Color::from_turn(turn),
            kopoint,
            size,
        }
    }

    /// Copy of the stone planes, indexed by [`Color::index`].
    pub fn position(&self) -> [Bitset; PIECE_COUNT] {
        self.position
    }

    /// Player to move as `SOUTH` or `NORTH`.
    pub fn turn(&self) -> i32 {
        self.player.turn()
    }

    pub fn player(&self) -> Color {
        self.player
    }

    /// Point the side to move may not play because of ko.
    pub fn kopoint(&self) -> Option<Point> {
        self.kopoint
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Occupant of a point, if any.
    pub fn stone_at(&self, point: Point) -> Option<Color> {
        if self.position[Color::Black.index()].contains(point) {
            Some(Color::Black)
        } else if self.position[Color::White.index()].contains(point) {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Move index for an algebraic coordinate.
    pub fn to_move(&self, coordinate: &str) -> Result<Point, NotationError> {
        notation::to_point(self.size, coordinate)
    }

    /// Algebraic coordinate of a move index.
    pub fn to_coordinates(&self, point: Point) -> String {
        notation::to_coordinate(self.size, point)
    }

    /// Grid of occupants, row 1 first.
    pub fn to_occupants(&self) -> Occupants {
        let side = self.size.side();
        (0..side)
            .map(|row| (0..side).map(|col| self.stone_at(row * side + col)).collect())
            .collect()
    }

    fn from_occupants(occupants: &Occupants, size: BoardSize) -> [Bitset; PIECE_COUNT] {
        let side = size.side();
        let mut position = [Bitset::new(); PIECE_COUNT];
        for (row, cells) in occupants.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(color) = cell {
                    position[color.index()].insert(row * side + col);
                }
            }
        }
        position
    }

    /// Diagram of this board: placement, turn symbol and ko coordinate.
    pub fn to_diagram(&self) -> String {
        let turn = match self.player {
            Color::Black => SOUTH_SYMBOL,
            Color::White => NORTH_SYMBOL,
        };
        let ko = self
            .kopoint
            .map_or_else(|| "-".to_string(), |p| self.to_coordinates(p));

        format!(
            "{} {turn} {ko}",
            notation::format_placement(&self.to_occupants())
        )
    }
}

impl FromStr for GoBoard {
    type Err = NotationError;

    /// Parse a diagram such as `9/9/9/9/9/9/9/9/9 b -`.
    fn from_str(diagram: &str) -> Result<Self, Self::Err> {
        let mut fields = diagram.split_whitespace();
        let placement = fields.next().ok_or(NotationError::MissingField("placement"))?;
        let turn = fields.next().ok_or(NotationError::MissingField("turn"))?;
        let ko = fields.next().ok_or(NotationError::MissingField("ko"))?;
        if let Some(extra) = fields.next() {
            return Err(NotationError::TrailingField(extra.to_string()));
        }

        let (size, occupants) = notation::parse_placement(placement)?;
        let mut symbols = turn.chars();
        let turn = match (symbols.next(), symbols.next()) {
            (Some(SOUTH_SYMBOL), None) => SOUTH,
            (Some(NORTH_SYMBOL), None) => NORTH,
            _ => return Err(NotationError::UnknownTurn(turn.to_string())),
        };
        let position = Self::from_occupants(&occupants, size);
        let kopoint = match ko {
            "-" => None,
            coordinate => {
                let point = notation::to_point(size, coordinate)?;
                if point == size.pass() || position.iter().any(|p| p.contains(point)) {
                    return Err(NotationError::InvalidKoPoint(coordinate.to_string()));
                }
                Some(point)
            }
        };

        Ok(Self::with_position(position, turn, kopoint, size))
    }
}

impl fmt::Display for GoBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.size.side();
        let stars = self.size.star_points();
        let letters: Vec<String> = (0..side)
            .map(|col| self.to_coordinates(col)[..1].to_string())
            .collect();

        writeln!(f, "{} to move", self.player.name())?;
        for row in (0..side).rev() {
            write!(f, "{:>2} |", row + 1)?;
            for col in 0..side {
                let point = row * side + col;
                let ch = match self.stone_at(point) {
                    Some(color) => color.symbol(),
                    None if stars.contains(&point) => STAR_SYMBOL,
                    None => EMPTY_SYMBOL,
                };
                write!(f, " {ch}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "     {}", letters.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = GoBoard::new(BoardSize::Thirteen);
        assert_eq!(board.size().side(), 13);
        assert_eq!(board.turn(), SOUTH);
        assert_eq!(board.kopoint(), None);
        assert_eq!(
            board.to_diagram(),
            "13/13/13/13/13/13/13/13/13/13/13/13/13 b -"
        );
    }

    #[test]
    fn test_diagram_roundtrip_with_ko() {
        let diagram = "9/9/XX3OO2/9/XXXXXXXXX/9/1X1O1XX2/OOOOOOOOO/9 w c3";
        let board: GoBoard = diagram.parse().unwrap();
        assert_eq!(board.turn(), NORTH);
        assert_eq!(board.kopoint(), Some(20));
        assert_eq!(board.stone_at(18), Some(Color::Black));
        assert_eq!(board.stone_at(23), Some(Color::White));
        assert_eq!(board.to_diagram(), diagram);
    }

    #[test]
    fn test_position_is_a_copy() {
        let board: GoBoard = "9/9/9/9/4X4/9/9/9/9 w -".parse().unwrap();
        let mut planes = board.position();
        planes[0].remove(40);
        assert_eq!(board.stone_at(40), Some(Color::Black));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            "9/9/9/9/9/9/9/9/9 b".parse::<GoBoard>().unwrap_err(),
            NotationError::MissingField("ko")
        );
        assert!(matches!(
            "9/9/9/9/9/9/9/9/9 x -".parse::<GoBoard>(),
            Err(NotationError::UnknownTurn(_))
        ));
    }

    #[test]
    fn test_strict_fields() {
        assert_eq!(
            "9/9/9/9/9/9/9/9/9 b - extra".parse::<GoBoard>().unwrap_err(),
            NotationError::TrailingField("extra".into())
        );
        assert_eq!(
            "9/9/9/9/4X4/9/9/9/9 w e5".parse::<GoBoard>().unwrap_err(),
            NotationError::InvalidKoPoint("e5".into())
        );
        assert_eq!(
            "9/9/9/9/9/9/9/9/9 w pass".parse::<GoBoard>().unwrap_err(),
            NotationError::InvalidKoPoint("pass".into())
        );
        assert!("9/9/9/9/4X4/9/9/9/9 w e6".parse::<GoBoard>().is_ok());
    }

    #[test]
    fn test_display() {
        let board: GoBoard = "9/9/9/9/4X4/9/9/9/9 w -".parse().unwrap();
        let text = board.to_string();
        assert!(text.starts_with("White to move"));
        assert!(text.contains(" 5 | . . . . X . . . . |"));
        assert!(text.contains(" 3 | . . + . . . + . . |"));
        assert!(text.trim_end().ends_with("a b c d e f g h j"));
    }
}
