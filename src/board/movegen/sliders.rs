//! Bishop, rook, and queen moves.

use super::super::attack_tables::magics;
use super::super::{Game, Move, Piece, Square};
use super::GenState;

impl Game {
    /// Slider targets are the magic-table attack set, restricted to the
    /// check mask and the mover's pin ray in one AND each.
    pub(crate) fn slider_moves<F: FnMut(Move) -> bool>(
        &self,
        state: &GenState,
        emit: &mut F,
    ) -> bool {
        let sliders: [(Piece, fn(usize, u64) -> u64); 3] = [
            (Piece::Bishop, magics::bishop_attacks),
            (Piece::Rook, magics::rook_attacks),
            (Piece::Queen, magics::queen_attacks),
        ];

        for (piece, attacks) in sliders {
            let mut movers = self.board.pieces[state.us_idx][piece.index()].0;
            while movers != 0 {
                let from = movers.trailing_zeros() as usize;
                movers &= movers - 1;

                let mut targets = attacks(from, state.all_occ)
                    & !state.own_occ
                    & state.check_mask
                    & state.pin_masks[from];
                while targets != 0 {
                    let to = targets.trailing_zeros() as usize;
                    targets &= targets - 1;
                    if emit(Move::new(Square::from_index(from), Square::from_index(to))) {
                        return true;
                    }
                }
            }
        }
        false
    }
}
