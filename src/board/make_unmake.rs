use super::{Board, Move, Piece};

impl Board {
    /// Play `mv` for the side to move: record it, move the amazon, place the
    /// spear and pass the turn.
    ///
    /// `mv` must be legal (see [`Board::is_legal`]); this is only checked in
    /// debug builds.
    pub fn apply_move(&mut self, mv: Move) {
        debug_assert!(self.is_legal(&mv), "illegal move {mv} applied");
        self.history.push(mv);
        let amazon = self.cells[mv.from().index()];
        self.cells[mv.from().index()] = Piece::Empty;
        self.cells[mv.to().index()] = amazon;
        self.cells[mv.spear().index()] = Piece::Spear;
        self.turn = self.turn.opponent();
        self.invalidate_winner();
    }

    /// Take back the last move, returning it. Does nothing (and returns
    /// `None`) when no moves have been played.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        // The spear may have landed on the origin, so clear it first.
        self.cells[mv.spear().index()] = Piece::Empty;
        self.cells[mv.from().index()] = self.cells[mv.to().index()];
        self.cells[mv.to().index()] = Piece::Empty;
        self.turn = self.turn.opponent();
        self.invalidate_winner();
        Some(mv)
    }
}
