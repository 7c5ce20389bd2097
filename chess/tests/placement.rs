use chess::{
    deserialize, parse_placement, serialize, Board, FenError, GameTag, Owner, Piece, PieceKind,
    Square, STARTING_PLACEMENT,
};

#[test]
fn test_standard_arrangement() {
    let board = parse_placement(STARTING_PLACEMENT).unwrap();
    let back_rank = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    for (x, kind) in back_rank.into_iter().enumerate() {
        assert_eq!(board.get(x, 0), Some(Piece::new(Owner::Black, kind)));
        assert_eq!(board.get(x, 1), Some(Piece::new(Owner::Black, PieceKind::Pawn)));
        assert_eq!(board.get(x, 6), Some(Piece::new(Owner::White, PieceKind::Pawn)));
        assert_eq!(board.get(x, 7), Some(Piece::new(Owner::White, kind)));
        for y in 2..6 {
            assert_eq!(board.get(x, y), None);
        }
    }
    assert_eq!(board.piece_count(), 32);
}

#[test]
fn test_empty_string_rejected() {
    assert_eq!(parse_placement(""), Err(FenError::EmptyInput));
}

#[test]
fn test_all_empty_board() {
    let board = parse_placement("8/8/8/8/8/8/8/8").unwrap();
    assert_eq!(board, Board::empty());
}

#[test]
fn test_nine_overflows_rank() {
    assert!(matches!(
        parse_placement("9/8/8/8/8/8/8/8"),
        Err(FenError::RankOverflow { rank: 0 })
    ));
}

#[test]
fn test_piece_counts_not_enforced() {
    let board = parse_placement("pppppppp/pppppppp/8/8/8/8/PPPPPPPP/PPPPPPPP").unwrap();
    assert_eq!(board.count(Owner::Black, PieceKind::Pawn), 16);
    assert_eq!(board.count(Owner::White, PieceKind::Pawn), 16);
    assert_eq!(board.count(Owner::White, PieceKind::King), 0);
}

#[test]
fn test_trailing_fields_ignored() {
    let full = parse_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR extra fields ignored");
    assert_eq!(full, parse_placement(STARTING_PLACEMENT));
    assert!(full.is_ok());
}

#[test]
fn test_short_rank_detected_where_it_ends() {
    // short rank followed by '/'
    assert_eq!(
        parse_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPP/RNBQKBNR"),
        Err(FenError::IncompleteRank { rank: 6, files: 7 })
    );
    // short last rank runs into end of input
    assert_eq!(
        parse_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN"),
        Err(FenError::IncompleteBoard { ranks: 8, files: 7 })
    );
}

#[test]
fn test_starting_position_digit_string() {
    let board = parse_placement(STARTING_PLACEMENT).unwrap();
    assert_eq!(
        serialize(&board),
        "4235632411111111000000000000000000000000000000001111111142356324"
    );
    assert_eq!(serialize(&Board::empty()), "0".repeat(64));
}

#[test]
fn test_digit_round_trip_is_lossy() {
    let board = parse_placement(STARTING_PLACEMENT).unwrap();
    let restored = deserialize(&serialize(&board)).unwrap();

    assert_ne!(restored, board);
    assert_eq!(restored.piece_count(), board.piece_count());
    for (_, piece) in restored.pieces() {
        assert_eq!(piece, Piece::new(Owner::White, PieceKind::Pawn));
    }
}

#[test]
fn test_every_tag_decodes_to_its_piece() {
    for owner in [Owner::White, Owner::Black] {
        for kind in PieceKind::ALL {
            let piece = Piece::new(owner, kind);
            let raw = piece.tag().raw();
            assert_eq!(GameTag::try_from(raw).unwrap().piece(), Some(piece));
        }
    }
}

#[test]
fn test_board_serializes_as_nested_arrays() {
    let board = parse_placement("k7/8/8/8/8/8/8/7K").unwrap();
    let json = serde_json::to_value(board).unwrap();
    assert_eq!(json["squares"][0][0]["owner"], "black");
    assert_eq!(json["squares"][0][0]["kind"], "king");
    assert!(json["squares"][0][1].is_null());

    let back: Board = serde_json::from_value(json).unwrap();
    assert_eq!(back, board);
    assert_eq!(back.piece_at(Square::new(7, 7).unwrap()).map(|p| p.owner), Some(Owner::White));
}
