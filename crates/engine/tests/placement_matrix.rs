use tessel_core::{Glyphs, Piece};
use tessel_engine::{Board, PlaceError};

fn piece(input: &str) -> Piece {
    Piece::from_ascii(input, Glyphs::default()).unwrap()
}

fn assert_round_trip(board_width: usize, board_height: usize, p: &Piece, x: usize, y: usize) {
    let mut board = Board::new(board_width, board_height);
    let empty = board.clone();
    board.insert(p, x, y).unwrap();
    board.remove(p, x, y).unwrap();
    assert_eq!(board, empty, "({x},{y}) did not restore the empty board");
}

mod aligned {
    use super::*;

    #[test]
    fn test_insert_remove_restores_every_offset() {
        let t = piece("010\n111");
        for y in 0..=8 {
            for x in 0..=7 {
                assert_round_trip(10, 10, &t, x, y);
            }
        }
    }

    #[test]
    fn test_interlocking_pieces() {
        let mut board = Board::new(4, 2);
        let s = piece("011\n110");
        let rest = piece("1001\n0011");
        board.insert(&s, 0, 0).unwrap();
        board.insert(&rest, 0, 0).unwrap();
        board.sync_to_bit_field();
        assert_eq!(board.bit_field().count_ones(), 8);
        assert_eq!(board.to_string(), "1111\n1111");

        board.remove(&rest, 0, 0).unwrap();
        board.sync_to_bit_field();
        assert_eq!(board.to_string(), "0110\n1100");
    }
}

mod straddling {
    use super::*;

    #[test]
    fn test_insert_remove_across_word_boundary() {
        let t = piece("010\n111");
        // every shift that makes the piece cross column 64
        for x in 62..=63 {
            assert_round_trip(80, 4, &t, x, 1);
        }
    }

    #[test]
    fn test_full_word_piece_at_every_shift() {
        let bar = piece(&"1".repeat(64));
        for x in [0, 1, 13, 63, 64, 65] {
            assert_round_trip(130, 2, &bar, x, 0);
        }
    }

    #[test]
    fn test_straddling_pieces_interlock() {
        let mut board = Board::new(70, 2);
        board.insert(&piece("1111"), 62, 0).unwrap();
        board.insert(&piece("1111"), 62, 1).unwrap();
        for x in 62..66 {
            assert!(board.get(x, 0));
            assert!(board.get(x, 1));
        }
        assert_eq!(
            board.insert(&piece("11"), 63, 0),
            Err(PlaceError::InsertCollision)
        );
    }
}

mod rollback {
    use super::*;

    #[test]
    fn test_collision_on_each_row_leaves_board_unchanged() {
        let bar = piece("1\n1\n1\n1");
        for blocker_row in 0..4 {
            let mut board = Board::new(4, 4);
            board.insert(&piece("1"), 2, blocker_row).unwrap();
            let before = board.clone();
            assert_eq!(
                board.insert(&bar, 2, 0),
                Err(PlaceError::InsertCollision),
                "blocker at row {blocker_row}"
            );
            assert_eq!(board, before, "blocker at row {blocker_row}");
        }
    }

    #[test]
    fn test_remove_mismatch_on_each_row_leaves_board_unchanged() {
        let bar = piece("1\n1\n1\n1");
        for missing_row in 0..4 {
            let mut board = Board::new(4, 4);
            board.insert(&bar, 2, 0).unwrap();
            board.remove(&piece("1"), 2, missing_row).unwrap();
            let before = board.clone();
            assert_eq!(
                board.remove(&bar, 2, 0),
                Err(PlaceError::RemoveMismatch),
                "hole at row {missing_row}"
            );
            assert_eq!(board, before, "hole at row {missing_row}");
        }
    }

    #[test]
    fn test_straddling_collision_rollback() {
        let block = piece("1111\n1111\n1111");
        for blocker_x in [62, 63, 64, 65] {
            for blocker_row in 0..3 {
                let mut board = Board::new(70, 3);
                board.insert(&piece("1"), blocker_x, blocker_row).unwrap();
                let before = board.clone();
                assert_eq!(
                    board.insert(&block, 62, 0),
                    Err(PlaceError::InsertCollision),
                    "blocker at ({blocker_x},{blocker_row})"
                );
                assert_eq!(board, before);
            }
        }
    }
}

mod bounds {
    use super::*;

    #[test]
    fn test_overflow_precedence() {
        let mut board = Board::new(6, 6);
        let square = piece("111\n111\n111");
        assert_eq!(board.insert(&square, 4, 0), Err(PlaceError::WidthOverflow));
        assert_eq!(board.insert(&square, 0, 4), Err(PlaceError::HeightOverflow));
        assert_eq!(
            board.insert(&square, 4, 4),
            Err(PlaceError::WidthAndHeightOverflow)
        );
        assert_eq!(board, Board::new(6, 6));
    }

    #[test]
    fn test_exact_fit_is_not_overflow() {
        let mut board = Board::new(3, 3);
        board.insert(&piece("111\n111\n111"), 0, 0).unwrap();
        assert!(board.get(2, 2));
    }

    #[test]
    fn test_remove_checks_bounds_first() {
        let mut board = Board::new(4, 4);
        assert_eq!(
            board.remove(&piece("11"), 3, 0),
            Err(PlaceError::WidthOverflow)
        );
    }
}

mod io {
    use super::*;

    #[test]
    fn test_parse_round_trips_through_sync() {
        let text = "0110\n1001\n0110";
        let mut board = Board::parse(text, Glyphs::default()).unwrap();
        board.sync_to_bit_field();
        assert_eq!(board.bit_field().to_ascii(Glyphs::default()), text);
        assert_eq!(board.to_string(), text);
    }

    #[test]
    fn test_parsed_occupancy_feeds_collision() {
        let mut board = Board::parse("0011\n0011", Glyphs::default()).unwrap();
        let square = piece("11\n11");
        assert_eq!(
            board.insert(&square, 1, 0),
            Err(PlaceError::InsertCollision)
        );
        board.insert(&square, 0, 0).unwrap();
        board.sync_to_bit_field();
        assert_eq!(board.bit_field().count_ones(), 8);
    }
}
