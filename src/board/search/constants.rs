//! Search constants.

/// Bound larger than any score, including `WINNING_VALUE`.
pub const INFINITY: i32 = i32::MAX;

/// Deepest search the default depth schedule will choose.
pub const MAX_SCHEDULED_DEPTH: u32 = 5;

/// Default move-count thresholds. Once more than `DEFAULT_THRESHOLDS[i]`
/// moves have been played, search at least `i + 2` plies deep.
pub const DEFAULT_THRESHOLDS: [usize; 4] = [20, 25, 35, 40];
