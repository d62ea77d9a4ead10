//! Zobrist hashing keys.
//!
//! The key table is generated from a fixed-seed PRNG, so every build of
//! this crate produces identical hashes for identical positions. That
//! makes hashes stable across processes, which replay pipelines rely on
//! when they persist repetition state.

use once_cell::sync::Lazy;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

pub(crate) struct ZobristKeys {
    /// One key per (color, piece kind, square).
    pub(crate) piece: [[[u64; 64]; 6]; 2],
    /// Precomputed XOR combination for every 4-bit rights value, so a
    /// rights transition costs a single lookup of `old ^ new`.
    pub(crate) castling: [u64; 16],
    /// One key per en-passant file.
    pub(crate) en_passant_file: [u64; 8],
    pub(crate) black_to_move: u64,
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(|| {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece = [[[0u64; 64]; 6]; 2];
    for color in &mut piece {
        for kind in color.iter_mut() {
            for key in kind.iter_mut() {
                *key = rng.gen();
            }
        }
    }

    let castling_base: [u64; 4] = [rng.gen(), rng.gen(), rng.gen(), rng.gen()];
    let mut castling = [0u64; 16];
    for (rights, slot) in castling.iter_mut().enumerate() {
        let mut key = 0u64;
        for (bit, base) in castling_base.iter().enumerate() {
            if rights & (1 << bit) != 0 {
                key ^= base;
            }
        }
        *slot = key;
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = rng.gen();
    }

    ZobristKeys {
        piece,
        castling,
        en_passant_file,
        black_to_move: rng.gen(),
    }
});

pub(crate) fn init() {
    Lazy::force(&ZOBRIST);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_castling_keys_compose_by_xor() {
        // castling[a ^ b] must equal castling[a] ^ castling[b] so that
        // incremental updates can hash the rights delta directly.
        for a in 0..16usize {
            for b in 0..16usize {
                assert_eq!(
                    ZOBRIST.castling[a ^ b],
                    ZOBRIST.castling[a] ^ ZOBRIST.castling[b]
                );
            }
        }
        assert_eq!(ZOBRIST.castling[0], 0);
    }

    #[test]
    fn test_keys_are_distinct() {
        // Sanity: no duplicate piece keys (would silently merge positions)
        let mut seen = std::collections::HashSet::new();
        for color in &ZOBRIST.piece {
            for kind in color {
                for &key in kind {
                    assert!(seen.insert(key));
                }
            }
        }
    }
}
