use super::Board;

impl Board {
    /// Number of leaf positions `depth` plies below this one.
    ///
    /// Counts move sequences, not distinct positions, and stops at positions
    /// where the side to move has lost.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        if depth == 1 {
            return self.legal_moves().count() as u64;
        }

        let moves: Vec<_> = self.legal_moves().collect();
        let mut nodes = 0;
        for mv in moves {
            self.apply_move(mv);
            nodes += self.perft(depth - 1);
            self.undo();
        }

        nodes
    }
}
