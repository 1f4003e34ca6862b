//! Hand-built positions exercising the rules end to end.

use chaturanga_core::{
    apply_move, classify, is_in_check, is_repetition, legal_moves, Board, GameOutcome, Move,
    Piece, PieceKind, Side, Square,
};

fn at(row: u8, col: u8) -> Square {
    Square::new(row, col).expect("on board")
}

fn place(board: Board, square: Square, kind: PieceKind, side: Side) -> Board {
    board.with_piece(square, Some(Piece::new(kind, side)))
}

#[test]
fn first_pawn_push_is_legal_and_quiet() {
    let board = Board::initial();
    let from = at(6, 4);
    let to = at(5, 4);

    assert!(legal_moves(&board, from).contains(&to));
    let next = apply_move(&board, from, to);
    assert!(!is_in_check(&next, Side::First));
    assert!(!is_in_check(&next, Side::Second));
}

#[test]
fn chariots_mate_a_lone_king_on_its_home_square() {
    // One chariot checks along the back row, the other sweeps the row in
    // front of the King.
    let board = place(Board::empty(), at(7, 4), PieceKind::King, Side::First);
    let board = place(board, at(0, 4), PieceKind::King, Side::Second);
    let board = place(board, at(7, 0), PieceKind::Chariot, Side::Second);
    let board = place(board, at(6, 7), PieceKind::Chariot, Side::Second);

    assert!(is_in_check(&board, Side::First));
    assert_eq!(
        classify(&board, Side::First),
        GameOutcome::Checkmate { winner: Side::Second }
    );
}

#[test]
fn lone_king_loses_even_when_it_can_move() {
    let board = Board::initial();
    let stripped = board
        .pieces()
        .filter(|(_, p)| p.side == Side::First && p.kind != PieceKind::King)
        .fold(board, |b, (square, _)| b.with_piece(square, None));

    assert_eq!(stripped.piece_count(Side::First), 1);
    assert!(!is_in_check(&stripped, Side::First));
    assert_eq!(
        classify(&stripped, Side::First),
        GameOutcome::BareKing { winner: Side::Second }
    );
    assert_eq!(classify(&stripped, Side::Second), GameOutcome::Ongoing);
}

#[test]
fn lone_king_in_check_is_still_bare() {
    let board = place(Board::empty(), at(7, 4), PieceKind::King, Side::First);
    let board = place(board, at(0, 4), PieceKind::King, Side::Second);
    let board = place(board, at(3, 4), PieceKind::Chariot, Side::Second);

    assert!(is_in_check(&board, Side::First));
    assert_eq!(
        classify(&board, Side::First),
        GameOutcome::BareKing { winner: Side::Second }
    );
}

#[test]
fn third_occurrence_is_a_repetition() {
    let shuffle: Vec<Move> = ["g1f3", "g8f6", "f3g1", "f6g8"]
        .iter()
        .map(|m| m.parse().unwrap())
        .collect();

    let start = Board::initial();
    let mut history = vec![start];
    let mut board = start;
    let mut flags = Vec::new();

    for mv in shuffle.iter().cycle().take(8) {
        board = apply_move(&board, mv.from, mv.to);
        if board == start {
            flags.push(is_repetition(&history, &board));
        }
        history.push(board);
    }

    // Occurrences of the start position: the initial one, then after moves 4 and 8.
    assert_eq!(flags, vec![false, true]);
    assert!(!is_repetition(&history[..1], &start));
}

#[test]
fn placement_text_describes_the_same_position() {
    let board = Board::from_placement("4k3/8/8/8/8/8/8/R3K3").unwrap();
    assert_eq!(
        board.piece_at(at(7, 0)),
        Some(Piece::new(PieceKind::Chariot, Side::First))
    );
    assert_eq!(board.piece_count(Side::First), 2);
    assert_eq!(board.piece_count(Side::Second), 1);
}
