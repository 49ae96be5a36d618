//! Goban-Rules: the rules of Go for game-tree search.
//!
//! This crate implements Go on 9x9, 13x13 and 19x19 boards behind a generic
//! two-player search interface: legal move generation with capture, suicide
//! and ko rules, reversible moves with a compact history, incremental
//! Zobrist hashing, and area scoring.
//!
//! ## Modules
//!
//! - [`constants`] - Geometry, scoring and capacity parameters
//! - [`bitset`] - Fixed-capacity bit planes
//! - [`point`] - Board sizes and point adjacency
//! - [`zobrist`] - Incremental position hashing
//! - [`notation`] - Diagram and coordinate notation
//! - [`board`] - Colors and immutable board snapshots
//! - [`chain`] - Chain and territory flood fills
//! - [`history`] - Per-ply undo history
//! - [`scoring`] - Area counting
//! - [`engine`] - The search interface ([`engine::Game`])
//! - [`game`] - The Go rules ([`game::GoGame`])
//! - [`playout`] - Random game simulation
//!
//! ## Example
//!
//! ```
//! use goban_rules::engine::Game;
//! use goban_rules::game::GoGame;
//! use goban_rules::point::BoardSize;
//!
//! let mut game = GoGame::new(BoardSize::Nine);
//! let mv = game.board().to_move("e5").unwrap();
//! assert!(game.is_legal(mv));
//! game.make_move(mv);
//! assert_eq!(game.to_board().to_diagram(), "9/9/9/9/4X4/9/9/9/9 w -");
//!
//! game.unmake_move();
//! assert_eq!(game.legal_moves().len(), 82);
//! ```

pub mod bitset;
pub mod board;
pub mod chain;
pub mod constants;
pub mod engine;
pub mod game;
pub mod history;
pub mod notation;
pub mod playout;
pub mod point;
pub mod scoring;
pub mod zobrist;
