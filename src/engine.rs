//! The interface between game rules and search algorithms.
//!
//! A search drives a [`Game`] through cursor-based move enumeration and
//! reversible make/unmake calls. Parallel searches give each worker its own
//! [`Game::deep_copy`], so implementations must not share mutable state
//! between clones.

use crate::point::Point;

/// Two-player game as seen by a search algorithm.
pub trait Game: Clone {
    /// Player to move: `SOUTH` or `NORTH`.
    fn turn(&self) -> i32;

    /// Check whether a move may be played in the current position.
    fn is_legal(&self, mv: Point) -> bool;

    /// Check whether the game is over.
    fn has_ended(&self) -> bool;

    /// Next legal move after the cursor, or `None` once all were returned.
    fn next_move(&mut self) -> Option<Point>;

    /// Restart move enumeration from the first candidate.
    fn reset_cursor(&mut self);

    fn cursor(&self) -> usize;

    fn set_cursor(&mut self, cursor: usize);

    /// Play a legal move. Legality is not checked.
    fn make_move(&mut self, mv: Point);

    /// Take back the last move.
    fn unmake_move(&mut self);

    /// Take back the last `length` moves at once.
    fn unmake_moves(&mut self, length: usize);

    /// Final result from the first player's point of view.
    fn outcome(&self) -> i32;

    /// Heuristic evaluation from the first player's point of view.
    fn score(&self) -> i32;

    /// Score assigned to drawn positions.
    fn contempt(&self) -> i32;

    /// Convert a score into a size-independent scale.
    fn to_centi_pawns(&self, score: i32) -> i32;

    /// Hash of the current position and side to move.
    fn hash(&self) -> u64;

    /// Number of moves stored in the history.
    fn length(&self) -> usize;

    /// Make room for at least `size` moves in the history.
    fn ensure_capacity(&mut self, size: usize);

    /// A fully independent copy of this game.
    fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// All legal moves of the current position, in generation order.
    ///
    /// The generation cursor is left as it was.
    fn legal_moves(&mut self) -> Vec<Point> {
        let cursor = self.cursor();
        self.reset_cursor();

        let mut moves = Vec::new();
        while let Some(mv) = self.next_move() {
            moves.push(mv);
        }

        self.set_cursor(cursor);
        moves
    }
}

/// Count the leaf nodes of the move tree `depth` plies deep.
///
/// Finished games count as leaves. The game is restored to its initial
/// state, cursor included.
pub fn perft<G: Game>(game: &mut G, depth: usize) -> u64 {
    if depth == 0 || game.has_ended() {
        return 1;
    }

    let cursor = game.cursor();
    game.reset_cursor();

    let mut nodes = 0;
    while let Some(mv) = game.next_move() {
        game.make_move(mv);
        nodes += perft(game, depth - 1);
        game.unmake_move();
    }

    game.set_cursor(cursor);
    nodes
}
