use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_symbols() {
    assert_eq!(Stone::Black.symbol(), 'X');
    assert_eq!(Stone::White.symbol(), 'O');
    assert_eq!(Stone::Empty.symbol(), '.');
    assert_eq!(Stone::Black.to_string(), "X");
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(9, 9);
    assert_eq!(pos.row, 9);
    assert_eq!(pos.col, 9);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(9, 9); // Center
    assert_eq!(pos.to_index(), 9 * 19 + 9);
    assert_eq!(pos.to_index(), 180);

    let pos2 = Pos::from_index(180);
    assert_eq!(pos2.row, 9);
    assert_eq!(pos2.col, 9);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(18, 18));
    assert!(Pos::is_valid(9, 9));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(19, 0));
    assert!(!Pos::is_valid(0, 19));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 19);
    assert_eq!(TOTAL_CELLS, 361);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_board_place_and_remove() {
    let mut board = Board::new();
    assert!(board.is_board_empty());

    let pos = Pos::new(3, 7);
    board.place_stone(pos, Stone::Black);
    assert_eq!(board.get(pos), Stone::Black);
    assert!(!board.is_empty(pos));
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(pos);
    assert_eq!(board.get(pos), Stone::Empty);
    assert!(board.is_board_empty());
}

#[test]
fn test_board_corner_cells() {
    let mut board = Board::new();
    for pos in [Pos::new(0, 0), Pos::new(0, 18), Pos::new(18, 0), Pos::new(18, 18)] {
        board.place_stone(pos, Stone::White);
        assert_eq!(board.get(pos), Stone::White);
    }
    assert_eq!(board.stone_count(), 4);
}
