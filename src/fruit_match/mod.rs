//! Fruit-matching minigame: an 8x8 match-3 board with swap moves, cascading
//! resolution, and scoring.
//!
//! The engine is a pure simulation core; the lobby renders its observable
//! state and forwards clicks, nothing more.

pub mod logic;
pub mod types;

#[allow(unused_imports)]
pub use logic::{
    find_matches, generate_board, handle_tile_click, new_game, reset_game, tick_game, try_swap,
};
#[allow(unused_imports)]
pub use types::{
    Board, CascadePacing, ClickOutcome, FruitKind, FruitMatchGame, GamePhase, BOARD_SIZE,
    MAX_REPAIR_ATTEMPTS, POINTS_PER_CELL,
};
