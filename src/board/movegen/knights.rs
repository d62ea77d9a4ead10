//! Knight moves.

use super::super::attack_tables::tables::KNIGHT_ATTACKS;
use super::super::{Game, Move, Piece, Square};
use super::GenState;

impl Game {
    /// A pinned knight can never stay on its pin ray, so pinned knights
    /// are skipped outright instead of masked per-target.
    pub(crate) fn knight_moves<F: FnMut(Move) -> bool>(
        &self,
        state: &GenState,
        emit: &mut F,
    ) -> bool {
        let mut knights =
            self.board.pieces[state.us_idx][Piece::Knight.index()].0 & !state.pinned;
        while knights != 0 {
            let from = knights.trailing_zeros() as usize;
            knights &= knights - 1;

            let mut targets = KNIGHT_ATTACKS[from] & !state.own_occ & state.check_mask;
            while targets != 0 {
                let to = targets.trailing_zeros() as usize;
                targets &= targets - 1;
                if emit(Move::new(Square::from_index(from), Square::from_index(to))) {
                    return true;
                }
            }
        }
        false
    }
}
