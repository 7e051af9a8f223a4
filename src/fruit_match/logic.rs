//! Fruit-matching engine: match detection, board generation, swap
//! validation, and cascading resolution with scoring.
//!
//! Everything here is render-agnostic. Grid-transforming operations are
//! value-semantic: they either take `&Board` and return a fresh board, or
//! mutate a board the caller exclusively owns. Fruit draws always come from
//! an injected `Rng` so tests can seed them.

use std::collections::HashSet;

use rand::Rng;

use super::types::{
    Board, CascadePacing, ClickOutcome, FruitKind, FruitMatchGame, PendingCascade, BOARD_SIZE,
    MAX_CASCADE_PASSES, MAX_REPAIR_ATTEMPTS, POINTS_PER_CELL,
};

/// Find every cell covered by a horizontal or vertical run of 3+ equal
/// kinds. Cells belonging to overlapping runs (L/T shapes) appear once.
///
/// Runs never include or bridge across empty cells. Returns an empty set
/// when the board is stable.
pub fn find_matches(board: &Board) -> HashSet<(usize, usize)> {
    let mut matched = HashSet::new();
    let n = board.size;

    // Horizontal runs
    for row in 0..n {
        let mut start = 0;
        while start < n {
            let kind = match board.cells[row][start] {
                Some(k) => k,
                None => {
                    start += 1;
                    continue;
                }
            };
            let mut end = start + 1;
            while end < n && board.cells[row][end] == Some(kind) {
                end += 1;
            }
            if end - start >= 3 {
                for col in start..end {
                    matched.insert((row, col));
                }
            }
            start = end;
        }
    }

    // Vertical runs
    for col in 0..n {
        let mut start = 0;
        while start < n {
            let kind = match board.cells[start][col] {
                Some(k) => k,
                None => {
                    start += 1;
                    continue;
                }
            };
            let mut end = start + 1;
            while end < n && board.cells[end][col] == Some(kind) {
                end += 1;
            }
            if end - start >= 3 {
                for row in start..end {
                    matched.insert((row, col));
                }
            }
            start = end;
        }
    }

    matched
}

/// Gravity fill: per column, compact surviving fruits downward preserving
/// their relative order, then fill the vacated top cells with fresh draws.
pub fn apply_gravity<R: Rng>(board: &mut Board, rng: &mut R) {
    let n = board.size;
    for col in 0..n {
        let survivors: Vec<FruitKind> = (0..n).filter_map(|row| board.cells[row][col]).collect();
        let vacated = n - survivors.len();
        for row in 0..vacated {
            board.cells[row][col] = Some(FruitKind::random(rng));
        }
        for (i, kind) in survivors.into_iter().enumerate() {
            board.cells[vacated + i][col] = Some(kind);
        }
    }
}

/// One cascade pass: remove all currently matched cells, then gravity-fill.
/// Returns the number of cells removed (0 means the board is stable).
pub fn cascade_pass<R: Rng>(board: &mut Board, rng: &mut R) -> usize {
    let matched = find_matches(board);
    if matched.is_empty() {
        return 0;
    }
    for &(row, col) in &matched {
        board.cells[row][col] = None;
    }
    apply_gravity(board, rng);
    matched.len()
}

/// Run cascade passes until the board stabilizes, accumulating
/// `POINTS_PER_CELL * removed` per pass. Bounded by `MAX_CASCADE_PASSES` so
/// resolution terminates even for adversarial refill sequences.
pub fn resolve_cascades<R: Rng>(board: &mut Board, rng: &mut R) -> u32 {
    let mut total = 0u32;
    for _ in 0..MAX_CASCADE_PASSES {
        let removed = cascade_pass(board, rng);
        if removed == 0 {
            break;
        }
        total += POINTS_PER_CELL * removed as u32;
    }
    total
}

/// Produce a starting board, repairing random fills until match-free or the
/// attempt ceiling is hit. Returns the board and the attempts spent; a board
/// handed back at the ceiling may still contain a match, which the caller
/// reports as a soft condition.
pub fn generate_board<R: Rng>(size: usize, rng: &mut R) -> (Board, u32) {
    let mut board = Board::random(size, rng);
    let mut attempts = 0u32;
    while attempts < MAX_REPAIR_ATTEMPTS {
        if cascade_pass(&mut board, rng) == 0 {
            break;
        }
        attempts += 1;
    }
    (board, attempts)
}

/// Validate and apply a swap. Returns the swapped board, or `None` when the
/// positions are identical, out of bounds, not edge-adjacent, or when the
/// exchange would not create at least one match. Never mutates the input.
pub fn try_swap(board: &Board, a: (usize, usize), b: (usize, usize)) -> Option<Board> {
    if a == b {
        return None;
    }
    if !board.in_bounds(a.0, a.1) || !board.in_bounds(b.0, b.1) {
        return None;
    }
    if !Board::is_adjacent(a, b) {
        return None;
    }

    let mut swapped = board.clone();
    let tmp = swapped.cells[a.0][a.1];
    swapped.cells[a.0][a.1] = swapped.cells[b.0][b.1];
    swapped.cells[b.0][b.1] = tmp;

    if find_matches(&swapped).is_empty() {
        return None;
    }
    Some(swapped)
}

/// Start a fresh game session with a generated board.
pub fn new_game<R: Rng>(pacing: CascadePacing, rng: &mut R) -> FruitMatchGame {
    let (board, attempts) = generate_board(BOARD_SIZE, rng);
    let generation_clean = find_matches(&board).is_empty();
    FruitMatchGame {
        cursor: (board.size / 2, board.size / 2),
        board,
        score: 0,
        moves: 0,
        selection: None,
        active: true,
        pacing,
        pending_cascade: None,
        generation_attempts: attempts,
        generation_clean,
    }
}

/// Replace the session wholesale: new board, zeroed score/moves/selection,
/// active again. Any pending cascade step dies with the old session, so a
/// reset mid-cascade can never be touched by a stale continuation.
pub fn reset_game<R: Rng>(game: &mut FruitMatchGame, rng: &mut R) {
    *game = new_game(game.pacing, rng);
}

/// Handle a tile click at (row, col): the selection/swap state machine.
///
/// Clicks are ignored while the session is inactive or a cascade is still
/// resolving; out-of-bounds coordinates are rejected outright rather than
/// corrupting state. A rejected swap turns the newly clicked tile into a
/// fresh selection.
pub fn handle_tile_click<R: Rng>(
    game: &mut FruitMatchGame,
    row: usize,
    col: usize,
    rng: &mut R,
) -> ClickOutcome {
    if !game.active {
        return ClickOutcome::Ignored;
    }
    if game.pending_cascade.is_some() {
        return ClickOutcome::Ignored;
    }
    if !game.board.in_bounds(row, col) {
        return ClickOutcome::OutOfBounds;
    }

    let clicked = (row, col);
    match game.selection {
        None => {
            game.selection = Some(clicked);
            ClickOutcome::Selected
        }
        Some(selected) if selected == clicked => {
            game.selection = None;
            ClickOutcome::Deselected
        }
        Some(selected) => match try_swap(&game.board, selected, clicked) {
            Some(swapped) => {
                game.board = swapped;
                game.moves += 1;
                game.selection = None;
                match game.pacing {
                    CascadePacing::Immediate => {
                        let delta = resolve_cascades(&mut game.board, rng);
                        game.score += delta;
                    }
                    CascadePacing::Staggered { first_delay_ms, .. } => {
                        game.pending_cascade = Some(PendingCascade {
                            delay_ms: first_delay_ms,
                            passes_done: 0,
                        });
                    }
                }
                ClickOutcome::Swapped
            }
            None => {
                game.selection = Some(clicked);
                ClickOutcome::Reselected
            }
        },
    }
}

/// Advance a paced cascade. Called from the main loop with elapsed
/// milliseconds; runs at most one pass per due step. Returns true if the
/// session changed.
pub fn tick_game<R: Rng>(game: &mut FruitMatchGame, dt_ms: u64, rng: &mut R) -> bool {
    let passes_done = match game.pending_cascade.as_mut() {
        Some(pending) => {
            if pending.delay_ms > dt_ms {
                pending.delay_ms -= dt_ms;
                return false;
            }
            pending.passes_done
        }
        None => return false,
    };

    let removed = cascade_pass(&mut game.board, rng);
    if removed == 0 {
        // Stabilized
        game.pending_cascade = None;
        return true;
    }
    game.score += POINTS_PER_CELL * removed as u32;

    if passes_done + 1 >= MAX_CASCADE_PASSES {
        game.pending_cascade = None;
        return true;
    }
    let step_delay_ms = match game.pacing {
        CascadePacing::Staggered { step_delay_ms, .. } => step_delay_ms,
        CascadePacing::Immediate => 0,
    };
    game.pending_cascade = Some(PendingCascade {
        delay_ms: step_delay_ms,
        passes_done: passes_done + 1,
    });
    true
}
