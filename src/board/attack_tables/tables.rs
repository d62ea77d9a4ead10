//! Precomputed leaper attack tables and line geometry.
//!
//! Rank indices count from the top of the board (a8 = 0), so white
//! pawns attack toward smaller indices.

use once_cell::sync::Lazy;

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut attacks = [0u64; 64];
    let deltas = [
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        let mut mask = 0u64;
        for (dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                mask |= 1u64 << ((nr as usize) * 8 + (nf as usize));
            }
        }
        *slot = mask;
    }
    attacks
});

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut attacks = [0u64; 64];
    let deltas = [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        let mut mask = 0u64;
        for (dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                mask |= 1u64 << ((nr as usize) * 8 + (nf as usize));
            }
        }
        *slot = mask;
    }
    attacks
});

/// Pawn capture targets per color. A pawn that has reached the far rank
/// no longer exists (it promoted), so those entries are empty.
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut attacks = [[0u64; 64]; 2];
    for sq in 0..64 {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        // White pawns advance toward rank 8, i.e. toward row 0.
        for (color, dr) in [(0usize, -1isize), (1, 1)] {
            let nr = r + dr;
            if (0..8).contains(&nr) {
                let mut mask = 0u64;
                for df in [-1, 1] {
                    let nf = f + df;
                    if (0..8).contains(&nf) {
                        mask |= 1u64 << ((nr as usize) * 8 + (nf as usize));
                    }
                }
                attacks[color][sq] = mask;
            }
        }
    }
    attacks
});

// Opposite directions adjacent, so chunks of two form full lines.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),  // toward rank 8
    (1, 0),   // toward rank 1
    (0, 1),   // toward file h
    (0, -1),  // toward file a
    (-1, 1),  // NE
    (1, -1),  // SW
    (-1, -1), // NW
    (1, 1),   // SE
];

fn walk_ray(sq: usize, dr: isize, df: isize) -> u64 {
    let mut mask = 0u64;
    let mut r = (sq / 8) as isize + dr;
    let mut f = (sq % 8) as isize + df;
    while (0..8).contains(&r) && (0..8).contains(&f) {
        mask |= 1u64 << ((r as usize) * 8 + (f as usize));
        r += dr;
        f += df;
    }
    mask
}

/// `BETWEEN[s1][s2]`: squares strictly between two squares sharing a
/// rank, file, or diagonal; empty otherwise.
pub(crate) static BETWEEN: Lazy<Box<[[u64; 64]; 64]>> = Lazy::new(|| {
    let mut table = Box::new([[0u64; 64]; 64]);
    for sq in 0..64 {
        for (dr, df) in DIRECTIONS {
            let mut between = 0u64;
            let mut r = (sq / 8) as isize + dr;
            let mut f = (sq % 8) as isize + df;
            while (0..8).contains(&r) && (0..8).contains(&f) {
                let target = (r as usize) * 8 + (f as usize);
                table[sq][target] = between;
                between |= 1u64 << target;
                r += dr;
                f += df;
            }
        }
    }
    table
});

/// `LINE[s1][s2]`: the full line through both squares (endpoints
/// included) when they are collinear; empty otherwise.
pub(crate) static LINE: Lazy<Box<[[u64; 64]; 64]>> = Lazy::new(|| {
    let mut table = Box::new([[0u64; 64]; 64]);
    for sq in 0..64 {
        // Pair opposite directions so the line extends past both squares.
        for pair in DIRECTIONS.chunks(2) {
            let forward = walk_ray(sq, pair[0].0, pair[0].1);
            let backward = walk_ray(sq, pair[1].0, pair[1].1);
            let full_line = forward | backward | (1u64 << sq);
            let mut others = forward | backward;
            while others != 0 {
                let target = others.trailing_zeros() as usize;
                others &= others - 1;
                table[sq][target] = full_line;
            }
        }
    }
    table
});
