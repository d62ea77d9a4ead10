//! Process-wide read-only attack and geometry tables.
//!
//! Everything here is built once, on first use or via [`init`], and
//! never mutated afterwards, so references can be shared across threads
//! freely.

pub(crate) mod magics;
pub(crate) mod tables;

use once_cell::sync::Lazy;

use super::types::{Bitboard, Square};

/// Force-build every table. Order: magic slider tables, then the leaper
/// and geometry tables. Lazy statics make this optional, but calling it
/// keeps first-move latency out of the hot path.
pub(crate) fn init() {
    Lazy::force(&magics::SLIDER_TABLES);
    Lazy::force(&tables::KNIGHT_ATTACKS);
    Lazy::force(&tables::KING_ATTACKS);
    Lazy::force(&tables::PAWN_ATTACKS);
    Lazy::force(&tables::BETWEEN);
    Lazy::force(&tables::LINE);
}

/// Squares strictly between two squares sharing a rank, file, or
/// diagonal; empty otherwise.
#[must_use]
pub fn between(s1: Square, s2: Square) -> Bitboard {
    Bitboard(tables::BETWEEN[s1.index()][s2.index()])
}

/// The full line through two collinear squares, endpoints included;
/// empty when the squares do not share a rank, file, or diagonal.
#[must_use]
pub fn line_through(s1: Square, s2: Square) -> Bitboard {
    Bitboard(tables::LINE[s1.index()][s2.index()])
}
