//! Random playouts (random game simulation).
//!
//! A playout plays uniformly random legal moves, pass included, until the
//! game ends or a ply limit is reached. It only uses the [`Game`] interface,
//! so it doubles as a stress test of move generation and undo.

use crate::engine::Game;
use crate::point::Point;

/// Pick a uniformly random legal move, or `None` if there is none.
pub fn random_move<G: Game>(game: &mut G, rng: &mut fastrand::Rng) -> Option<Point> {
    let moves = game.legal_moves();
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}

/// Play random moves until the game ends or `max_plies` moves were played.
///
/// The history grows as needed. Returns the number of moves played.
pub fn random_playout<G: Game>(game: &mut G, rng: &mut fastrand::Rng, max_plies: usize) -> usize {
    game.ensure_capacity(game.length() + max_plies + 1);

    let mut plies = 0;
    while plies < max_plies && !game.has_ended() {
        let Some(mv) = random_move(game, rng) else {
            break;
        };
        game.make_move(mv);
        plies += 1;
    }

    plies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GoGame;
    use crate::point::BoardSize;

    #[test]
    fn test_playout_is_reproducible() {
        let mut a = GoGame::new(BoardSize::Nine);
        let mut b = GoGame::new(BoardSize::Nine);
        let na = random_playout(&mut a, &mut fastrand::Rng::with_seed(11), 60);
        let nb = random_playout(&mut b, &mut fastrand::Rng::with_seed(11), 60);
        assert_eq!(na, nb);
        assert_eq!(a.moves(), b.moves());
        assert_eq!(a.hash(), b.hash());
    }

    #[test]
    fn test_playout_respects_limit_and_undo() {
        let mut game = GoGame::new(BoardSize::Nine);
        let start = game.to_board();
        let plies = random_playout(&mut game, &mut fastrand::Rng::with_seed(3), 40);
        assert!(plies <= 40);
        assert_eq!(game.length(), plies);
        assert_eq!(game.hash(), game.compute_hash());

        game.unmake_moves(plies);
        assert_eq!(game.to_board(), start);
    }
}
