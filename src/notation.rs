//! Diagram and coordinate notation.
//!
//! ## Placement diagrams
//!
//! A placement lists the board rows separated by `/`, starting with row 1.
//! Stones are written `X` (black) and `O` (white); runs of empty points are
//! written as decimal counts, so an empty 9x9 board is `9/9/9/9/9/9/9/9/9`.
//!
//! Older diagrams sometimes carry redundant digits such as `199` for an
//! empty row of 19. A count whose value does not fit in the cells left on its
//! row is read as the sum of its digits, and formatting always writes the
//! minimal form back.
//!
//! ## Coordinates
//!
//! A point is written as a column letter followed by a row number, e.g.
//! `e5`. Column letters skip `i`. The pass move is written `pass`.

use thiserror::Error;

use crate::board::Color;
use crate::constants::COLUMN_LETTERS;
use crate::point::{BoardSize, Point};

/// A grid of occupants, indexed `[row][col]` with row 0 first.
pub type Occupants = Vec<Vec<Option<Color>>>;

/// Errors produced while reading notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("missing {0} field in diagram")]
    MissingField(&'static str),

    #[error("unsupported board size {0} (expected 9, 13 or 19)")]
    UnsupportedSize(usize),

    #[error("row {row} describes {found} points, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown piece symbol '{0}'")]
    UnknownSymbol(char),

    #[error("unknown turn symbol '{0}'")]
    UnknownTurn(String),

    #[error("invalid coordinate '{0}'")]
    InvalidCoordinate(String),

    #[error("ko point '{0}' is not an empty intersection")]
    InvalidKoPoint(String),

    #[error("unexpected trailing field '{0}' in diagram")]
    TrailingField(String),
}

/// Parse a placement field into an occupant grid.
///
/// The number of rows decides the board size.
pub fn parse_placement(placement: &str) -> Result<(BoardSize, Occupants), NotationError> {
    let rows: Vec<&str> = placement.split('/').collect();
    let size = BoardSize::try_from(rows.len())?;
    let side = size.side();

    let occupants = rows
        .iter()
        .enumerate()
        .map(|(i, row)| parse_row(row, side, i + 1))
        .collect::<Result<Occupants, _>>()?;

    Ok((size, occupants))
}

fn parse_row(row: &str, side: usize, number: usize) -> Result<Vec<Option<Color>>, NotationError> {
    let mut cells = Vec::with_capacity(side);
    let mut chars = row.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(digit) = c.to_digit(10) {
            let mut digits = vec![digit];
            while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                digits.push(d);
                chars.next();
            }
            let free = side.saturating_sub(cells.len());
            cells.extend(std::iter::repeat_n(None, run_length(&digits, free)));
        } else {
            let color = Color::from_symbol(c).ok_or(NotationError::UnknownSymbol(c))?;
            cells.push(Some(color));
        }
    }

    if cells.len() != side {
        return Err(NotationError::RowLength {
            row: number,
            expected: side,
            found: cells.len(),
        });
    }

    Ok(cells)
}

/// Value of an empty-run token given the cells still free on its row.
fn run_length(digits: &[u32], free: usize) -> usize {
    let value = digits
        .iter()
        .try_fold(0usize, |acc, &d| acc.checked_mul(10)?.checked_add(d as usize));

    match value {
        Some(v) if v <= free => v,
        _ => digits.iter().map(|&d| d as usize).sum(),
    }
}

/// Format an occupant grid as a minimal placement field.
pub fn format_placement(occupants: &Occupants) -> String {
    let rows: Vec<String> = occupants
        .iter()
        .map(|row| {
            let mut out = String::new();
            let mut empties = 0;
            for cell in row {
                match cell {
                    None => empties += 1,
                    Some(color) => {
                        if empties > 0 {
                            out.push_str(&empties.to_string());
                            empties = 0;
                        }
                        out.push(color.symbol());
                    }
                }
            }
            if empties > 0 {
                out.push_str(&empties.to_string());
            }
            out
        })
        .collect();

    rows.join("/")
}

/// Algebraic coordinate of a point, or `pass` for the pass move.
pub fn to_coordinate(size: BoardSize, point: Point) -> String {
    if point == size.pass() {
        return "pass".into();
    }

    let side = size.side();
    let col = COLUMN_LETTERS[point % side] as char;
    format!("{col}{}", point / side + 1)
}

/// Point named by an algebraic coordinate.
pub fn to_point(size: BoardSize, coordinate: &str) -> Result<Point, NotationError> {
    let invalid = || NotationError::InvalidCoordinate(coordinate.to_string());
    let lower = coordinate.trim().to_ascii_lowercase();

    if lower == "pass" {
        return Ok(size.pass());
    }

    let side = size.side();
    let mut chars = lower.chars();
    let letter = chars.next().ok_or_else(invalid)?;
    let col = COLUMN_LETTERS[..side]
        .iter()
        .position(|&c| c as char == letter)
        .ok_or_else(invalid)?;

    let digits = chars.as_str();
    if !digits.starts_with(|c: char| ('1'..='9').contains(&c))
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let row: usize = digits.parse().map_err(|_| invalid())?;
    if row > side {
        return Err(invalid());
    }

    Ok((row - 1) * side + col)
}
