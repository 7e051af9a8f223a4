// UI timing constants
pub const TICK_INTERVAL_MS: u64 = 100;
