//! Bitboard chess rules engine.
//!
//! Provides the rules core consumed by analyzers, trainers, and replay
//! validators:
//! - Legal-only move generation (check masks, pin masks, magic
//!   bitboards) with no pseudo-legal filtering pass
//! - An immutable position state machine with incremental Zobrist
//!   hashing
//! - Terminal-state detection: checkmate, stalemate, 50-move rule,
//!   repetition, insufficient material
//! - FEN parsing and formatting
//!
//! # Quick Start
//!
//! ```
//! use fianchetto::board::{Game, Status};
//!
//! // Start a game and play 1. e4 e5
//! let game = Game::new();
//! let game = game.try_move_uci("e2e4").unwrap();
//! let game = game.try_move_uci("e7e5").unwrap();
//!
//! assert_eq!(game.status(), Status::Active);
//! assert_eq!(game.legal_moves().len(), 29);
//! ```
//!
//! # Positions from FEN
//!
//! ```
//! use fianchetto::board::Game;
//!
//! let game = Game::from_fen(
//!     "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
//! )
//! .unwrap();
//! assert_eq!(game.legal_moves().len(), 48);
//! assert_eq!(
//!     game.to_fen(),
//!     "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
//! );
//! ```
//!
//! # Bulk replay
//!
//! Positions are immutable: `make_move` returns a new [`board::Game`]
//! and never invalidates earlier ones, so hosts can fan independent
//! games out across threads. Call [`init`] once at startup to build the
//! shared attack and hashing tables eagerly instead of on first use.
//!
//! # Features
//!
//! - `serde` - Enable serialization for `Piece`, `Color`, `Square`,
//!   `Move`, and `Status`
//! - `logging` - Enable optional table-initialization diagnostics via
//!   the `log` crate

// Enable pedantic lints with sensible domain-specific exceptions
#![warn(clippy::pedantic)]
// Bitboard hex literals are clearer without separators (bit patterns visible)
#![allow(clippy::unreadable_literal)]
// Index casts are ubiquitous and safe in chess (board indices, square indices)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Large arrays are needed for move lists and attack tables
#![allow(clippy::large_stack_arrays)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
mod zobrist;

pub use board::init;
