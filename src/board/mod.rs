mod apply;
mod attack_tables;
mod error;
mod fen;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use attack_tables::{between, line_through};
pub use error::{FenError, MoveError, SquareError};
pub use fen::START_FEN;
pub use state::{Board, Game, Status};
pub use types::{Bitboard, Color, Move, MoveList, Piece, Special, Square};

/// Force-build the process-wide tables: magic slider tables, leaper and
/// geometry tables, then the Zobrist keys. Everything is immutable
/// afterwards and safe to share across threads.
pub fn init() {
    attack_tables::init();
    crate::zobrist::init();
}
