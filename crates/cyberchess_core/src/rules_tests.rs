use super::*;

fn pc(color: Color, kind: PieceKind) -> Piece {
    Piece { color, kind }
}

fn at(row: i8, col: i8) -> u8 {
    sq(row, col).unwrap()
}

#[test]
fn white_pawn_steps_forward_backward_and_double() {
    let mut b = Board::empty();
    let pawn = pc(Color::White, PieceKind::Pawn);
    b.set_piece(at(6, 4), Some(pawn));

    assert!(is_legal_move(&b, at(6, 4), at(5, 4), pawn)); // one step
    assert!(is_legal_move(&b, at(6, 4), at(4, 4), pawn)); // double from start row
    assert!(is_legal_move(&b, at(6, 4), at(7, 4), pawn)); // backward, variant rule

    // Sideways is never a pawn move.
    assert!(!is_legal_move(&b, at(6, 4), at(6, 5), pawn));
    assert!(!is_legal_move(&b, at(6, 4), at(6, 3), pawn));
    // Neither is a three-step push.
    assert!(!is_legal_move(&b, at(6, 4), at(3, 4), pawn));
}

#[test]
fn pawn_double_step_needs_clear_path() {
    let mut b = Board::empty();
    let pawn = pc(Color::White, PieceKind::Pawn);
    b.set_piece(at(6, 4), Some(pawn));
    b.set_piece(at(5, 4), Some(pc(Color::Black, PieceKind::Knight)));

    assert!(!is_legal_move(&b, at(6, 4), at(4, 4), pawn));
    // And the blocked square itself is not a straight-move target.
    assert!(!is_legal_move(&b, at(6, 4), at(5, 4), pawn));
}

#[test]
fn pawn_captures_diagonally_forward_only() {
    let mut b = Board::empty();
    let pawn = pc(Color::White, PieceKind::Pawn);
    b.set_piece(at(6, 4), Some(pawn));
    b.set_piece(at(5, 5), Some(pc(Color::Black, PieceKind::Pawn)));
    b.set_piece(at(7, 5), Some(pc(Color::Black, PieceKind::Pawn)));

    assert!(is_legal_move(&b, at(6, 4), at(5, 5), pawn));
    // No capture on the empty forward diagonal.
    assert!(!is_legal_move(&b, at(6, 4), at(5, 3), pawn));
    // No capturing backward.
    assert!(!is_legal_move(&b, at(6, 4), at(7, 5), pawn));
}

#[test]
fn black_pawn_direction_is_mirrored() {
    let mut b = Board::empty();
    let pawn = pc(Color::Black, PieceKind::Pawn);
    b.set_piece(at(1, 3), Some(pawn));

    assert!(is_legal_move(&b, at(1, 3), at(2, 3), pawn));
    assert!(is_legal_move(&b, at(1, 3), at(3, 3), pawn)); // double from row 1
    assert!(is_legal_move(&b, at(1, 3), at(0, 3), pawn)); // backward

    b.set_piece(at(2, 2), Some(pc(Color::White, PieceKind::Bishop)));
    assert!(is_legal_move(&b, at(1, 3), at(2, 2), pawn));
}

#[test]
fn own_piece_can_never_be_captured() {
    let mut b = Board::empty();
    let queen = pc(Color::White, PieceKind::Queen);
    b.set_piece(at(4, 4), Some(queen));
    b.set_piece(at(4, 7), Some(pc(Color::White, PieceKind::Rook)));

    assert!(!is_legal_move(&b, at(4, 4), at(4, 7), queen));
    // A same-square "move" targets the mover itself and is rejected too.
    assert!(!is_legal_move(&b, at(4, 4), at(4, 4), queen));
}

#[test]
fn rook_moves_on_clear_lines_only() {
    let mut b = Board::empty();
    let rook = pc(Color::White, PieceKind::Rook);
    b.set_piece(at(4, 0), Some(rook));

    assert!(is_legal_move(&b, at(4, 0), at(4, 7), rook));
    assert!(is_legal_move(&b, at(4, 0), at(0, 0), rook));
    assert!(!is_legal_move(&b, at(4, 0), at(3, 1), rook));

    // Any intermediate piece blocks the long move.
    b.set_piece(at(4, 3), Some(pc(Color::Black, PieceKind::Pawn)));
    assert!(!is_legal_move(&b, at(4, 0), at(4, 7), rook));
    // But capturing the blocker itself is fine.
    assert!(is_legal_move(&b, at(4, 0), at(4, 3), rook));
}

#[test]
fn bishop_needs_a_clear_diagonal() {
    let mut b = Board::empty();
    let bishop = pc(Color::Black, PieceKind::Bishop);
    b.set_piece(at(0, 2), Some(bishop));

    assert!(is_legal_move(&b, at(0, 2), at(5, 7), bishop));
    assert!(!is_legal_move(&b, at(0, 2), at(1, 4), bishop));

    b.set_piece(at(2, 4), Some(pc(Color::White, PieceKind::Pawn)));
    assert!(!is_legal_move(&b, at(0, 2), at(5, 7), bishop));
    assert!(is_legal_move(&b, at(0, 2), at(2, 4), bishop));
}

#[test]
fn knight_jumps_over_anything() {
    let b = Board::startpos();
    let knight = pc(Color::White, PieceKind::Knight);

    // From the back rank, over the pawn wall.
    assert!(is_legal_move(&b, at(7, 1), at(5, 2), knight));
    assert!(is_legal_move(&b, at(7, 1), at(5, 0), knight));
    // Not an L-shape.
    assert!(!is_legal_move(&b, at(7, 1), at(5, 1), knight));
    // Landing on an own pawn is still a capture of an own piece.
    assert!(!is_legal_move(&b, at(7, 1), at(6, 3), knight));
}

#[test]
fn queen_unions_rook_and_bishop_lines() {
    let mut b = Board::empty();
    let queen = pc(Color::White, PieceKind::Queen);
    b.set_piece(at(4, 4), Some(queen));

    assert!(is_legal_move(&b, at(4, 4), at(4, 0), queen));
    assert!(is_legal_move(&b, at(4, 4), at(0, 4), queen));
    assert!(is_legal_move(&b, at(4, 4), at(1, 1), queen));
    assert!(!is_legal_move(&b, at(4, 4), at(2, 5), queen));

    b.set_piece(at(2, 2), Some(pc(Color::Black, PieceKind::Pawn)));
    assert!(!is_legal_move(&b, at(4, 4), at(1, 1), queen));
}

#[test]
fn king_moves_one_square_any_direction() {
    let mut b = Board::empty();
    let king = pc(Color::Black, PieceKind::King);
    b.set_piece(at(3, 3), Some(king));

    for (dr, dc) in [
        (1, 1),
        (1, 0),
        (1, -1),
        (0, 1),
        (0, -1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
    ] {
        assert!(is_legal_move(&b, at(3, 3), at(3 + dr, 3 + dc), king));
    }
    assert!(!is_legal_move(&b, at(3, 3), at(3, 5), king));
    assert!(!is_legal_move(&b, at(3, 3), at(5, 5), king));
}

#[test]
fn path_clear_is_exclusive_of_endpoints() {
    let mut b = Board::empty();
    b.set_piece(at(4, 0), Some(pc(Color::White, PieceKind::Rook)));
    b.set_piece(at(4, 7), Some(pc(Color::Black, PieceKind::Rook)));

    // Occupied endpoints do not count as blockers.
    assert!(path_clear(&b, at(4, 0), at(4, 7)));

    b.set_piece(at(4, 1), Some(pc(Color::Black, PieceKind::Pawn)));
    assert!(!path_clear(&b, at(4, 0), at(4, 7)));
}
