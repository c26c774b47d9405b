use super::constants::DEFAULT_THRESHOLDS;

/// Chooses a search depth from the number of moves already played.
///
/// Every move adds a spear, so the branching factor shrinks as the game goes
/// on and deeper searches become affordable. The depth is 1 until the move
/// count exceeds the first threshold and rises by one for each further
/// threshold exceeded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepthSchedule {
    thresholds: Vec<usize>,
}

impl DepthSchedule {
    /// A schedule with the given ascending thresholds.
    #[must_use]
    pub fn new(mut thresholds: Vec<usize>) -> Self {
        thresholds.sort_unstable();
        DepthSchedule { thresholds }
    }

    /// Search depth for a position with `move_count` moves played.
    #[must_use]
    pub fn depth_for(&self, move_count: usize) -> u32 {
        1 + self.thresholds.iter().filter(|&&t| move_count > t).count() as u32
    }
}

impl Default for DepthSchedule {
    fn default() -> Self {
        DepthSchedule::new(DEFAULT_THRESHOLDS.to_vec())
    }
}
