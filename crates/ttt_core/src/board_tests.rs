use super::*;

fn board(s: &str) -> Board {
    s.parse().expect("valid board literal")
}

#[test]
fn new_board_is_empty() {
    let b = Board::new();
    assert_eq!(b.empty_cells(), (0..9).collect::<Vec<_>>());
    assert_eq!(b.outcome(), Outcome::InProgress);
    assert!(!b.is_full());
}

#[test]
fn apply_move_marks_only_target_cell() {
    let mut b = board("X../.O./...");
    let before = *b.cells();
    b.apply_move(5, Mark::X).unwrap();

    for i in 0..9 {
        if i == 5 {
            assert_eq!(b.get(i), Some(Mark::X));
        } else {
            assert_eq!(b.cells()[i], before[i]);
        }
    }
}

#[test]
fn apply_move_rejects_out_of_range() {
    let mut b = board("X../.O./...");
    let before = b;
    assert_eq!(b.apply_move(9, Mark::O), Err(MoveError::OutOfRange { index: 9 }));
    assert_eq!(b, before);
}

#[test]
fn apply_move_rejects_occupied_cell() {
    let mut b = board("X../.O./...");
    let before = b;
    assert_eq!(b.apply_move(4, Mark::X), Err(MoveError::CellOccupied { index: 4 }));
    assert_eq!(b, before);
}

#[test]
fn probe_reverts_cell() {
    let mut b = board("XX./.../...");
    let before = b;
    let won = b.probe(2, Mark::X, |inner| inner.check_winner()).unwrap();
    assert_eq!(won, Some(Mark::X));
    assert_eq!(b, before);
}

#[test]
fn probe_refuses_occupied_cell() {
    let mut b = board("XO./.../...");
    let before = b;
    let result = b.probe(1, Mark::X, |_| ());
    assert_eq!(result, Err(MoveError::CellOccupied { index: 1 }));
    assert_eq!(b, before);
}

#[test]
fn detects_rows_columns_and_diagonals() {
    assert_eq!(board("XXX/OO./...").check_winner(), Some(Mark::X));
    assert_eq!(board("X../XO./XO.").check_winner(), Some(Mark::X));
    assert_eq!(board("O.X/.OX/..O").check_winner(), Some(Mark::O));
    assert_eq!(board("X.O/XO./O..").winning_line(), Some([2, 4, 6]));
}

#[test]
fn full_board_with_triple_is_win_not_draw() {
    let b = board("XXX/OOX/XOO");
    assert!(b.is_full());
    assert_eq!(b.outcome(), Outcome::Win(Mark::X));
}

#[test]
fn full_board_without_triple_is_draw() {
    let b = board("XOX/XOO/OXX");
    assert_eq!(b.outcome(), Outcome::Draw);
}

#[test]
fn side_to_move_follows_counts() {
    assert_eq!(Board::new().side_to_move(), Some(Mark::X));
    assert_eq!(board("X../.../...").side_to_move(), Some(Mark::O));
    assert_eq!(board("XX./.../...").side_to_move(), None);
}

#[test]
fn parse_rejects_bad_input() {
    assert_eq!(
        "XO.".parse::<Board>(),
        Err(ParseBoardError::WrongLength { found: 3 })
    );
    assert_eq!(
        "XO?/.../...".parse::<Board>(),
        Err(ParseBoardError::InvalidCell {
            character: '?',
            position: 2
        })
    );
}

#[test]
fn display_round_trips_through_parse() {
    let b = board("x_o / -X- / ..o");
    assert_eq!(b.to_string(), "X.O/.X./..O");
    assert_eq!(board(&b.to_string()), b);
}
