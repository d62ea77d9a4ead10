//! FEN parsing and formatting, plus long-algebraic move parsing.

use std::str::FromStr;

use super::error::{FenError, MoveError};
use super::types::{
    file_to_index, rank_to_index, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
};
use super::{Board, Color, Game, Move, Piece, Square};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Game {
    /// Parse a position from FEN notation. All six fields are required.
    ///
    /// Returns an error without constructing a partial position if any
    /// field is malformed or a side does not have exactly one king.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        // Piece placement: ranks run top-down, matching the internal
        // square numbering (a8 = 0).
        let mut board = Board::empty();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank, rank_str) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    file += digit as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= 8 {
                        return Err(FenError::WrongFileCount {
                            rank,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square::new(rank, file), color, piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::WrongFileCount { rank, files: file });
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling_rights = 0u8;
        for c in parts[2].chars() {
            match c {
                'K' => castling_rights |= CASTLE_WHITE_K,
                'Q' => castling_rights |= CASTLE_WHITE_Q,
                'k' => castling_rights |= CASTLE_BLACK_K,
                'q' => castling_rights |= CASTLE_BLACK_Q,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        let en_passant_target = if parts[3] == "-" {
            None
        } else {
            let sq = parts[3]
                .parse::<Square>()
                .map_err(|_| FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                })?;
            Some(sq)
        };

        let halfmove_clock: u32 =
            parts[4]
                .parse()
                .map_err(|_| FenError::InvalidHalfmoveClock {
                    found: parts[4].to_string(),
                })?;
        let fullmove_number: u32 =
            parts[5]
                .parse()
                .map_err(|_| FenError::InvalidFullmoveNumber {
                    found: parts[5].to_string(),
                })?;
        if fullmove_number == 0 {
            return Err(FenError::InvalidFullmoveNumber {
                found: parts[5].to_string(),
            });
        }

        let mut king_squares = [Square::from_index(0); 2];
        for color in Color::BOTH {
            let kings = board.pieces[color.index()][Piece::King.index()];
            if kings.popcount() != 1 {
                return Err(FenError::WrongKingCount {
                    color: color.to_string(),
                    found: kings.popcount(),
                });
            }
            king_squares[color.index()] = kings.lsb().expect("popcount checked above");
        }

        let mut game = Game {
            board,
            side_to_move,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            king_squares,
            hash: 0,
            hash_history: Vec::new(),
        };
        game.hash = game.compute_hash();
        Ok(game)
    }

    /// Format the position as FEN. A position parsed from a valid FEN
    /// formats back to the identical string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in 0..8 {
            if rank > 0 {
                placement.push('/');
            }
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.board.at(Square::new(rank, file)) {
                    if empty > 0 {
                        placement.push_str(&empty.to_string());
                        empty = 0;
                    }
                    placement.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        if self.castling_rights & CASTLE_WHITE_K != 0 {
            castling.push('K');
        }
        if self.castling_rights & CASTLE_WHITE_Q != 0 {
            castling.push('Q');
        }
        if self.castling_rights & CASTLE_BLACK_K != 0 {
            castling.push('k');
        }
        if self.castling_rights & CASTLE_BLACK_Q != 0 {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{placement} {active} {castling} {ep} {} {}",
            self.halfmove_clock, self.fullmove_number
        )
    }

    /// Parse a move in UCI long algebraic notation (e.g., "e2e4",
    /// "e7e8q") and resolve it against the legal move list.
    pub fn parse_move(&self, uci: &str) -> Result<Move, MoveError> {
        if uci.len() < 4 || uci.len() > 5 {
            return Err(MoveError::InvalidLength { len: uci.len() });
        }

        let chars: Vec<char> = uci.chars().collect();
        if !('a'..='h').contains(&chars[0])
            || !('1'..='8').contains(&chars[1])
            || !('a'..='h').contains(&chars[2])
            || !('1'..='8').contains(&chars[3])
        {
            return Err(MoveError::InvalidSquare {
                notation: uci.to_string(),
            });
        }

        let from = Square::new(rank_to_index(chars[1]), file_to_index(chars[0]));
        let to = Square::new(rank_to_index(chars[3]), file_to_index(chars[2]));

        let promotion = if uci.len() == 5 {
            let piece = Piece::from_char(chars[4])
                .ok_or(MoveError::InvalidPromotion { char: chars[4] })?;
            if matches!(piece, Piece::Pawn | Piece::King) {
                return Err(MoveError::InvalidPromotion { char: chars[4] });
            }
            Some(piece)
        } else {
            None
        };

        let legal_moves = self.legal_moves();
        for &mv in &legal_moves {
            if mv.from() == from && mv.to() == to && mv.promotion() == promotion {
                return Ok(mv);
            }
        }

        Err(MoveError::Illegal {
            notation: uci.to_string(),
        })
    }

    /// Parse a UCI move and apply it in one call.
    pub fn try_move_uci(&self, uci: &str) -> Result<Game, MoveError> {
        let mv = self.parse_move(uci)?;
        Ok(self.make_move(mv))
    }
}

impl FromStr for Game {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::from_fen(s)
    }
}
