//! Pawn moves: bulk pushes, captures, promotions, en passant.

use super::super::attack_tables::magics;
use super::super::attack_tables::tables::PAWN_ATTACKS;
use super::super::types::PROMOTION_PIECES;
use super::super::{Bitboard, Color, Game, Move, Piece, Square};
use super::GenState;

impl Game {
    /// Pushes are generated in bulk by shifting the whole pawn set;
    /// white pawns advance toward rank 8, which is toward smaller
    /// indices. The check and pin filters are applied per target.
    pub(crate) fn pawn_moves<F: FnMut(Move) -> bool>(&self, state: &GenState, emit: &mut F) -> bool {
        let pawns = self.board.pieces[state.us_idx][Piece::Pawn.index()].0;
        if pawns == 0 {
            return false;
        }
        let empty = !state.all_occ;
        let white = state.us == Color::White;

        let (single, double, promo_rank) = if white {
            let single = (pawns >> 8) & empty;
            let double = ((single & Bitboard::RANK_3.0) >> 8) & empty;
            (single, double, Bitboard::RANK_8.0)
        } else {
            let single = (pawns << 8) & empty;
            let double = ((single & Bitboard::RANK_6.0) << 8) & empty;
            (single, double, Bitboard::RANK_1.0)
        };

        let mut targets = single;
        while targets != 0 {
            let to = targets.trailing_zeros() as usize;
            targets &= targets - 1;
            let from = if white { to + 8 } else { to - 8 };
            let to_bit = 1u64 << to;
            if state.check_mask & state.pin_masks[from] & to_bit == 0 {
                continue;
            }
            if to_bit & promo_rank != 0 {
                if emit_promotions(from, to, emit) {
                    return true;
                }
            } else if emit(Move::new(Square::from_index(from), Square::from_index(to))) {
                return true;
            }
        }

        let mut targets = double;
        while targets != 0 {
            let to = targets.trailing_zeros() as usize;
            targets &= targets - 1;
            let from = if white { to + 16 } else { to - 16 };
            if state.check_mask & state.pin_masks[from] & (1u64 << to) == 0 {
                continue;
            }
            if emit(Move::new(Square::from_index(from), Square::from_index(to))) {
                return true;
            }
        }

        let mut movers = pawns;
        while movers != 0 {
            let from = movers.trailing_zeros() as usize;
            movers &= movers - 1;

            let mut captures = PAWN_ATTACKS[state.us_idx][from]
                & state.opp_occ
                & state.check_mask
                & state.pin_masks[from];
            while captures != 0 {
                let to = captures.trailing_zeros() as usize;
                captures &= captures - 1;
                if (1u64 << to) & promo_rank != 0 {
                    if emit_promotions(from, to, emit) {
                        return true;
                    }
                } else if emit(Move::new(Square::from_index(from), Square::from_index(to))) {
                    return true;
                }
            }
        }

        if let Some(ep) = self.en_passant_target {
            if self.en_passant_moves(state, ep, pawns, emit) {
                return true;
            }
        }
        false
    }

    /// En passant needs three extra checks: the capture must resolve
    /// any check (by removing the checking pawn or by blocking with the
    /// arriving one), the capturing pawn's pin ray must admit the
    /// target, and removing both pawns from the king's rank must not
    /// uncover a rook or queen.
    fn en_passant_moves<F: FnMut(Move) -> bool>(
        &self,
        state: &GenState,
        ep: Square,
        pawns: u64,
        emit: &mut F,
    ) -> bool {
        let ep_sq = ep.index();
        let ep_bit = 1u64 << ep_sq;
        let captured_bit = match state.us {
            Color::White => ep_bit << 8,
            Color::Black => ep_bit >> 8,
        };

        let them = &self.board.pieces[state.them_idx];
        let rook_like = them[Piece::Rook.index()].0 | them[Piece::Queen.index()].0;

        let mut candidates = PAWN_ATTACKS[state.them_idx][ep_sq] & pawns;
        while candidates != 0 {
            let from = candidates.trailing_zeros() as usize;
            candidates &= candidates - 1;

            if state.check_mask & (ep_bit | captured_bit) == 0 {
                continue;
            }
            if state.pin_masks[from] & ep_bit == 0 {
                continue;
            }

            let occupancy_after = (state.all_occ ^ (1u64 << from) ^ captured_bit) | ep_bit;
            if magics::rook_attacks(state.king_sq, occupancy_after) & rook_like != 0 {
                continue;
            }

            if emit(Move::en_passant(Square::from_index(from), ep)) {
                return true;
            }
        }
        false
    }
}

fn emit_promotions<F: FnMut(Move) -> bool>(from: usize, to: usize, emit: &mut F) -> bool {
    for promo in PROMOTION_PIECES {
        if emit(Move::new_promotion(
            Square::from_index(from),
            Square::from_index(to),
            promo,
        )) {
            return true;
        }
    }
    false
}
