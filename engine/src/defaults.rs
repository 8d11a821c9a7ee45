pub const FIELD_WIDTH: usize = 16;
pub const FIELD_HEIGHT: usize = 12;
pub const TICK_INTERVAL_MS: u64 = 10;
