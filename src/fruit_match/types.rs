//! Fruit-matching game data structures.
//!
//! Match-3 board with swap moves and cascading resolution. The board is plain
//! data; all behavior lives in `logic.rs`.

use rand::Rng;

/// Board side length for the standard game.
pub const BOARD_SIZE: usize = 8;
/// Points awarded per cell removed in a cascade pass.
pub const POINTS_PER_CELL: u32 = 10;
/// Repair-attempt ceiling when generating a match-free starting board.
pub const MAX_REPAIR_ATTEMPTS: u32 = 50;
/// Cascade pass ceiling. Keeps resolution bounded even for adversarial
/// refill sequences.
pub const MAX_CASCADE_PASSES: u32 = 50;
/// Delay before the first cascade pass after an accepted swap.
pub const FIRST_CASCADE_DELAY_MS: u64 = 300;
/// Delay between subsequent cascade passes.
pub const CASCADE_STEP_DELAY_MS: u64 = 500;

/// One of the eight fruit kinds that can occupy a board cell.
///
/// Equality is identity of kind; there is no ordering between kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FruitKind {
    Apple,
    Orange,
    Lemon,
    Grape,
    Strawberry,
    Watermelon,
    Cherry,
    Peach,
}

impl FruitKind {
    pub const ALL: [FruitKind; 8] = [
        FruitKind::Apple,
        FruitKind::Orange,
        FruitKind::Lemon,
        FruitKind::Grape,
        FruitKind::Strawberry,
        FruitKind::Watermelon,
        FruitKind::Cherry,
        FruitKind::Peach,
    ];

    /// Draw a kind uniformly at random. The only source of entropy in the
    /// engine; every fruit on the board comes through here.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Emoji used to render this kind.
    pub fn symbol(&self) -> &'static str {
        match self {
            FruitKind::Apple => "\u{1F34E}",      // 🍎
            FruitKind::Orange => "\u{1F34A}",     // 🍊
            FruitKind::Lemon => "\u{1F34B}",      // 🍋
            FruitKind::Grape => "\u{1F347}",      // 🍇
            FruitKind::Strawberry => "\u{1F353}", // 🍓
            FruitKind::Watermelon => "\u{1F349}", // 🍉
            FruitKind::Cherry => "\u{1F352}",     // 🍒
            FruitKind::Peach => "\u{1F351}",      // 🍑
        }
    }
}

/// The game board: a square grid of fruit cells.
///
/// `None` is the empty sentinel used only inside intermediate cascade states
/// (between match removal and gravity fill). Outside of those, every cell
/// holds a fruit and no row or column contains a run of 3+ equal kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Cells indexed as cells[row][col]; row 0 is the top.
    pub cells: Vec<Vec<Option<FruitKind>>>,
    /// Side length.
    pub size: usize,
}

impl Board {
    /// Create an all-empty board.
    pub fn empty(size: usize) -> Self {
        Self {
            cells: vec![vec![None; size]; size],
            size,
        }
    }

    /// Fill every cell with an independent uniform draw. The result is raw:
    /// it may contain matches and must go through the generator's repair
    /// loop before play.
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Self {
        let mut board = Self::empty(size);
        for row in 0..size {
            for col in 0..size {
                board.cells[row][col] = Some(FruitKind::random(rng));
            }
        }
        board
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    pub fn fruit_at(&self, row: usize, col: usize) -> Option<FruitKind> {
        self.cells[row][col]
    }

    /// True when the two positions share an edge (Manhattan distance 1).
    pub fn is_adjacent(a: (usize, usize), b: (usize, usize)) -> bool {
        a.0.abs_diff(b.0) + a.1.abs_diff(b.1) == 1
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }
}

/// Where the controller is in the click/swap/cascade cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No tile selected.
    Idle,
    /// One tile selected, waiting for the second click.
    Selecting,
    /// A swap was accepted and paced cascade passes are still pending.
    Resolving,
}

/// What a tile click did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Coordinates outside the board; rejected, state unchanged.
    OutOfBounds,
    /// Session inactive or a cascade is still resolving.
    Ignored,
    /// First tile of a prospective swap chosen.
    Selected,
    /// Same tile clicked twice; selection cleared.
    Deselected,
    /// Swap rejected; the newly clicked tile became a fresh selection.
    Reselected,
    /// Swap accepted; move counted and cascade resolution started.
    Swapped,
}

/// How cascade passes are scheduled after an accepted swap.
///
/// Pacing exists purely so a renderer can show intermediate board states; it
/// never changes the final board or score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadePacing {
    /// Resolve to stabilization synchronously inside the click.
    Immediate,
    /// One pass per elapsed delay, driven by `tick_game`.
    Staggered {
        first_delay_ms: u64,
        step_delay_ms: u64,
    },
}

impl CascadePacing {
    /// The staggered pacing used by the lobby UI.
    pub fn staggered() -> Self {
        CascadePacing::Staggered {
            first_delay_ms: FIRST_CASCADE_DELAY_MS,
            step_delay_ms: CASCADE_STEP_DELAY_MS,
        }
    }
}

/// A scheduled cascade step. Dropped wholesale by `reset_game`, so a reset
/// can never be mutated by a stale continuation from the previous session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCascade {
    /// Milliseconds until the next pass runs.
    pub delay_ms: u64,
    /// Passes already executed for the current swap.
    pub passes_done: u32,
}

/// Active fruit-matching game session.
///
/// Owned exclusively by its controller functions in `logic.rs`; the UI only
/// reads it.
#[derive(Debug, Clone)]
pub struct FruitMatchGame {
    pub board: Board,
    pub score: u32,
    pub moves: u32,
    /// Tentatively chosen tile awaiting a second click.
    pub selection: Option<(usize, usize)>,
    /// Gates all clicks. Cleared when the lobby leaves the game view.
    pub active: bool,
    /// Current cursor position (row, col) for keyboard play.
    pub cursor: (usize, usize),
    pub pacing: CascadePacing,
    /// Scheduled cascade step, if a swap is still resolving.
    pub pending_cascade: Option<PendingCascade>,
    /// Repair attempts the generator spent on the current board.
    pub generation_attempts: u32,
    /// False when the generator hit its repair ceiling and handed back a
    /// board that still contains a match. Soft condition, reported by the
    /// lobby, never an error.
    pub generation_clean: bool,
}

impl FruitMatchGame {
    pub fn phase(&self) -> GamePhase {
        if self.pending_cascade.is_some() {
            GamePhase::Resolving
        } else if self.selection.is_some() {
            GamePhase::Selecting
        } else {
            GamePhase::Idle
        }
    }

    /// Move the cursor, clamping to board bounds.
    pub fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let max = self.board.size as i32 - 1;
        let new_row = (self.cursor.0 as i32 + d_row).clamp(0, max) as usize;
        let new_col = (self.cursor.1 as i32 + d_col).clamp(0, max) as usize;
        self.cursor = (new_row, new_col);
    }
}
