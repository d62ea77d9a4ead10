//! Draw detection tests.

use crate::board::{Game, Status};

fn play(game: &Game, moves: &[&str]) -> Game {
    let mut game = game.clone();
    for uci in moves {
        game = game.try_move_uci(uci).expect("move in test line is legal");
    }
    game
}

#[test]
fn test_fifty_move_rule_draw() {
    let game = Game::from_fen("8/8/8/8/8/8/8/K1k5 w - - 100 1").unwrap();
    assert!(game.is_draw());
    assert_eq!(game.status(), Status::Draw);
}

#[test]
fn test_fifty_move_rule_not_yet() {
    let game = Game::from_fen("8/5k2/8/8/8/8/5K2/4R3 w - - 99 80").unwrap();
    assert!(!game.is_draw());
    assert_eq!(game.status(), Status::Active);
}

#[test]
fn test_halfmove_resets_on_pawn_move() {
    let game = Game::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 99 1").unwrap();
    let game = game.try_move_uci("e2e4").unwrap();
    assert_eq!(game.halfmove_clock(), 0);
    assert!(!game.is_draw());
}

#[test]
fn test_threefold_by_knight_shuffle() {
    // Start -> Nf3 Nf6 Ng1 Ng8, twice. The final shuffle recreates the
    // starting position for the third time.
    let game = play(
        &Game::new(),
        &[
            "g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8",
        ],
    );
    assert!(game.is_draw());
    assert_eq!(game.status(), Status::Draw);
}

#[test]
fn test_two_occurrences_is_not_yet_a_draw() {
    let game = play(&Game::new(), &["g1f3", "g8f6", "f3g1", "f6g8"]);
    assert!(!game.is_draw());
}

#[test]
fn test_repetition_window_resets_on_irreversible_move() {
    // Two shuffles, but a pawn push in the middle makes the earlier
    // occurrences unreachable: positions before an irreversible move
    // cannot recur.
    let game = play(
        &Game::new(),
        &[
            "g1f3", "g8f6", "f3g1", "f6g8", "e2e4", "e7e5", "g1f3", "g8f6", "f3g1", "f6g8",
        ],
    );
    assert!(!game.is_draw());
}

#[test]
fn test_bare_kings_draw() {
    let game = Game::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1").unwrap();
    assert!(game.is_insufficient_material());
    assert_eq!(game.status(), Status::Draw);
}

#[test]
fn test_king_and_minor_draw() {
    for fen in [
        "8/8/8/4k3/8/4K1n1/8/8 w - - 0 1",
        "8/8/8/4k3/8/4K1b1/8/8 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/6N1 w - - 0 1",
    ] {
        let game = Game::from_fen(fen).unwrap();
        assert!(game.is_insufficient_material(), "expected draw for {fen}");
        assert_eq!(game.status(), Status::Draw);
    }
}

#[test]
fn test_king_and_rook_is_not_a_material_draw() {
    let game = Game::from_fen("8/8/8/4k3/8/4K3/8/6R1 w - - 0 1").unwrap();
    assert!(!game.is_insufficient_material());
    assert_eq!(game.status(), Status::Active);
}

#[test]
fn test_king_and_pawn_is_not_a_material_draw() {
    let game = Game::from_fen("8/8/8/4k3/8/4K3/6P1/8 w - - 0 1").unwrap();
    assert!(!game.is_insufficient_material());
}

#[test]
fn test_same_colored_bishops_draw() {
    // Both bishops on light squares (g6 and c2)
    let game = Game::from_fen("8/8/6b1/4k3/8/4K3/2B5/8 w - - 0 1").unwrap();
    assert!(game.is_insufficient_material());
    assert_eq!(game.status(), Status::Draw);
}

#[test]
fn test_opposite_colored_bishops_not_a_material_draw() {
    // f6 is dark, c2 is light
    let game = Game::from_fen("8/8/5b2/4k3/8/4K3/2B5/8 w - - 0 1").unwrap();
    assert!(!game.is_insufficient_material());
}

#[test]
fn test_two_minors_same_side_not_a_material_draw() {
    let game = Game::from_fen("8/8/8/4k3/8/4K3/8/5NN1 w - - 0 1").unwrap();
    assert!(!game.is_insufficient_material());
}
