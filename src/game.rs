//! Go rules: legality, captures, ko, undo and scoring.
//!
//! A [`GoGame`] owns the live bit planes and a [`History`] of every ply
//! played since the start board was set. Moves are point indices; the index
//! equal to the board area is a pass. Two consecutive passes, or a repeated
//! position, end the game.
//!
//! Ko follows the simple rule: after a move captures exactly one stone, the
//! opponent may not immediately recapture on that point if doing so would
//! capture exactly one stone back.

use std::fmt;

use crate::bitset::Bitset;
use crate::board::{Color, GoBoard};
use crate::chain::chain;
use crate::constants::{
    CONTEMPT_SCORE, DEFAULT_CAPACITY, DEFAULT_KOMI, DRAW_SCORE, MAX_SCORE, PIECE_COUNT,
};
use crate::engine::Game;
use crate::history::{Entry, History};
use crate::point::{BoardSize, Point, neighbors};
use crate::scoring::compute_scores;
use crate::zobrist::ZobristHash;

/// A Go game between two players.
///
/// Cloning produces a fully independent game: the planes and every history
/// buffer are copied by value. Only the immutable Zobrist key table is shared.
#[derive(Clone)]
pub struct GoGame {
    /// Hash key table
    hasher: &'static ZobristHash,
    /// Start position and turn
    board: GoBoard,
    size: BoardSize,
    /// Player to move
    player: Color,
    history: History,
    /// Current stone planes
    state: [Bitset; PIECE_COUNT],
    /// Next candidate tested by `next_move`
    cursor: usize,
    /// Current illegal ko move
    kopoint: Option<Point>,
    last_move: Option<Point>,
    hash: u64,
    /// Compensation score for white
    komi: f64,
}

impl Default for GoGame {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

impl GoGame {
    /// A new game on an empty board of the given size.
    pub fn new(size: BoardSize) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, size)
    }

    /// A new game whose history initially holds `capacity` plies.
    pub fn with_capacity(capacity: usize, size: BoardSize) -> Self {
        let mut game = Self {
            hasher: ZobristHash::shared(),
            board: GoBoard::new(size),
            size,
            player: Color::Black,
            history: History::with_capacity(capacity),
            state: [Bitset::new(); PIECE_COUNT],
            cursor: 0,
            kopoint: None,
            last_move: None,
            hash: 0,
            komi: DEFAULT_KOMI,
        };
        game.set_board(GoBoard::new(size));
        game
    }

    /// The board this game started from.
    pub fn board(&self) -> &GoBoard {
        &self.board
    }

    /// Start over from the given board, clearing the history.
    pub fn set_board(&mut self, board: GoBoard) {
        self.history.clear();
        self.size = board.size();
        self.state = board.position();
        self.kopoint = board.kopoint();
        self.player = board.player();
        self.last_move = None;
        self.board = board;
        self.hash = self.compute_hash();
        self.reset_cursor();
    }

    /// Snapshot of the current position.
    pub fn to_board(&self) -> GoBoard {
        GoBoard::with_position(self.state, self.player.turn(), self.kopoint, self.size)
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn player(&self) -> Color {
        self.player
    }

    pub fn kopoint(&self) -> Option<Point> {
        self.kopoint
    }

    pub fn komi(&self) -> f64 {
        self.komi
    }

    /// Sets the compensation added to white's score.
    pub fn set_komi(&mut self, komi: f64) {
        self.komi = komi;
    }

    /// The move that led to the current position.
    pub fn last_move(&self) -> Option<Point> {
        self.last_move
    }

    /// Moves played since the start board, oldest first.
    pub fn moves(&self) -> Vec<Point> {
        let mut moves: Vec<Point> = (1..self.history.len())
            .filter_map(|ply| self.history.entry(ply).last_move)
            .collect();
        if !self.history.is_empty() {
            moves.extend(self.last_move);
        }
        moves
    }

    /// Check if it is a forfeit move identifier.
    #[inline]
    fn is_forfeit(&self, mv: Point) -> bool {
        mv == self.size.pass()
    }

    /// Check if an intersection does not contain any stones.
    #[inline]
    fn is_empty_point(&self, point: Point) -> bool {
        !self.state[Color::Black.index()].contains(point)
            && !self.state[Color::White.index()].contains(point)
    }

    /// Check if a stone would be captured immediately if placed on a point.
    ///
    /// That is, if its chain would have no liberties and no adjacent rival
    /// chain in atari would be captured by the move.
    fn is_suicide(&self, color: Color, point: Point) -> bool {
        if !chain(&self.state, self.size, color, point).liberties.is_empty() {
            return false;
        }

        let rival = color.opponent();
        !neighbors(self.size, point).any(|n| {
            self.state[rival.index()].contains(n)
                && chain(&self.state, self.size, rival, n).is_in_atari()
        })
    }

    /// Rival stones that playing on `point` would capture.
    fn captures(&self, point: Point) -> Bitset {
        let rival = self.player.opponent();
        let mut captured = Bitset::new();

        for n in neighbors(self.size, point) {
            if self.state[rival.index()].contains(n) && !captured.contains(n) {
                let group = chain(&self.state, self.size, rival, n);
                if group.is_in_atari() {
                    for stone in &group.stones {
                        captured.insert(stone);
                    }
                }
            }
        }

        captured
    }

    /// Checks if the current position occurred before after a stone move.
    pub fn is_repetition(&self) -> bool {
        let pass = self.size.pass();
        self.history
            .moves_and_hashes()
            .any(|(mv, hash)| mv != Some(pass) && hash == self.hash)
    }

    /// Area scores of both players, without komi.
    pub fn scores(&self) -> [usize; PIECE_COUNT] {
        compute_scores(&self.state, self.size)
    }

    pub fn black_score(&self) -> f64 {
        self.scores()[Color::Black.index()] as f64
    }

    pub fn white_score(&self) -> f64 {
        self.scores()[Color::White.index()] as f64 + self.komi
    }

    /// Hash of the current position computed from scratch.
    pub fn compute_hash(&self) -> u64 {
        self.hasher.compute(&self.state, self.player)
    }

    /// Performs a move on the current position.
    fn move_pieces(&mut self, mv: Point) {
        self.hash = self.hasher.switch(self.hash, self.player);

        if self.is_forfeit(mv) {
            self.kopoint = None;
            return;
        }

        let rival = self.player.opponent();
        let captured = self.captures(mv);
        for stone in &captured {
            self.state[rival.index()].remove(stone);
            self.hash = self.hasher.remove(self.hash, stone, rival);
        }

        self.state[self.player.index()].insert(mv);
        self.hash = self.hasher.insert(self.hash, mv, self.player);

        self.kopoint = if captured.count() == 1 {
            captured.iter().next()
        } else {
            None
        };
    }

    /// Store the game state on the history.
    fn push_state(&mut self) {
        let entry = Entry {
            last_move: self.last_move,
            hash: self.hash,
            kopoint: self.kopoint,
            cursor: self.cursor,
        };
        self.history.push(entry, &self.state);
    }

    /// Retrieve a game state from the history.
    fn pop_state(&mut self, ply: usize) {
        let entry = self.history.restore(ply, &mut self.state);
        self.last_move = entry.last_move;
        self.hash = entry.hash;
        self.kopoint = entry.kopoint;
        self.cursor = entry.cursor;
    }
}

impl Game for GoGame {
    fn turn(&self) -> i32 {
        self.player.turn()
    }

    fn is_legal(&self, mv: Point) -> bool {
        if self.is_forfeit(mv) {
            return true;
        }

        if mv > self.size.pass() || !self.is_empty_point(mv) {
            return false;
        }

        if self.kopoint == Some(mv) && self.captures(mv).count() == 1 {
            return false;
        }

        !self.is_suicide(self.player, mv)
    }

    fn has_ended(&self) -> bool {
        let Some(ply) = self.history.len().checked_sub(1) else {
            return false;
        };

        let pass = Some(self.size.pass());
        if self.last_move == pass && self.history.entry(ply).last_move == pass {
            return true;
        }

        self.is_repetition()
    }

    fn next_move(&mut self) -> Option<Point> {
        while self.cursor <= self.size.pass() {
            let candidate = self.cursor;
            self.cursor += 1;
            if self.is_legal(candidate) {
                return Some(candidate);
            }
        }

        None
    }

    fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    fn make_move(&mut self, mv: Point) {
        debug_assert!(self.is_legal(mv), "illegal move {mv}");
        self.push_state();
        self.move_pieces(mv);
        self.player = self.player.opponent();
        self.last_move = Some(mv);
        self.reset_cursor();
    }

    fn unmake_move(&mut self) {
        let Some(ply) = self.history.len().checked_sub(1) else {
            debug_assert!(false, "no move to take back");
            return;
        };

        self.pop_state(ply);
        self.player = self.player.opponent();
        self.history.truncate(1);
    }

    fn unmake_moves(&mut self, length: usize) {
        if length == 0 {
            return;
        }
        debug_assert!(length <= self.history.len());

        let ply = self.history.len() - length;
        if length % 2 == 1 {
            self.player = self.player.opponent();
        }
        self.pop_state(ply);
        self.history.truncate(length);
    }

    fn outcome(&self) -> i32 {
        if self.is_repetition() && self.last_move != Some(self.size.pass()) {
            return DRAW_SCORE;
        }

        let black = self.black_score();
        let white = self.white_score();
        if black < white {
            -MAX_SCORE
        } else if black > white {
            MAX_SCORE
        } else {
            DRAW_SCORE
        }
    }

    /// Score difference multiplied by 10 to remain an integer.
    fn score(&self) -> i32 {
        let scores = self.scores();
        let black = scores[Color::Black.index()] as i32 * 10;
        let white = scores[Color::White.index()] as i32 * 10;
        black - (white + (self.komi * 10.0).round() as i32)
    }

    fn contempt(&self) -> i32 {
        CONTEMPT_SCORE
    }

    fn to_centi_pawns(&self, score: i32) -> i32 {
        self.size.area() as i32 * (score / 10)
    }

    fn hash(&self) -> u64 {
        self.hash
    }

    fn length(&self) -> usize {
        self.history.len()
    }

    fn ensure_capacity(&mut self, size: usize) {
        self.history.ensure_capacity(size);
    }
}

impl fmt::Debug for GoGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoGame")
            .field("diagram", &self.to_board().to_diagram())
            .field("length", &self.history.len())
            .field("last_move", &self.last_move)
            .field("cursor", &self.cursor)
            .field("hash", &format_args!("{:#018x}", self.hash))
            .field("komi", &self.komi)
            .finish()
    }
}

impl fmt::Display for GoGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_board().fmt(f)
    }
}
