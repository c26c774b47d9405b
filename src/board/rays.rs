//! Precomputed geometry: per-square rays in every direction and square names.
//!
//! Built once on first use and shared by every board.

use once_cell::sync::Lazy;

use super::types::{Direction, Square, BOARD_SIZE, NUM_SQUARES};

/// `RAYS[sq][dir]` lists the squares one, two, ... steps away from `sq` in
/// direction `dir`, stopping at the board edge.
pub(crate) static RAYS: Lazy<Vec<[Vec<Square>; 8]>> = Lazy::new(|| {
    (0..NUM_SQUARES)
        .map(|idx| {
            let col = (idx % BOARD_SIZE) as isize;
            let row = (idx / BOARD_SIZE) as isize;
            std::array::from_fn(|d| {
                let (dcol, drow) = Direction::ALL[d].delta();
                let mut ray = Vec::with_capacity(BOARD_SIZE - 1);
                let (mut c, mut r) = (col + dcol, row + drow);
                while Square::exists(c, r) {
                    ray.push(Square::from_index_unchecked(r as usize * BOARD_SIZE + c as usize));
                    c += dcol;
                    r += drow;
                }
                ray
            })
        })
        .collect()
});

/// Canonical names, `"a1"` through `"j10"`, indexed by square.
pub(crate) static SQUARE_NAMES: Lazy<Vec<String>> = Lazy::new(|| {
    (0..NUM_SQUARES)
        .map(|idx| {
            let col = (b'a' + (idx % BOARD_SIZE) as u8) as char;
            format!("{col}{}", idx / BOARD_SIZE + 1)
        })
        .collect()
});
