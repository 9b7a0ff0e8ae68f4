//! Rule engine tests: win priority, rejection, and full-game scenarios.

use tictactoe_rewind::{
    Board, Cell, GameStatus, Mark, Move, MoveError, Position, apply, check_winner, is_draw,
    is_full, status,
};

fn marked(board: Board, positions: &[Position], mark: Mark) -> Board {
    positions
        .iter()
        .fold(board, |b, &p| b.with(p, Cell::Marked(mark)))
}

fn play(cells: &[usize]) -> Board {
    let mut board = Board::new();
    for (move_number, &index) in cells.iter().enumerate() {
        let pos = Position::from_index(index).expect("cell index in range");
        board = apply(&board, Move::new(Mark::for_move(move_number), pos)).expect("legal move");
    }
    board
}

#[test]
fn empty_board_has_no_winner() {
    assert!(check_winner(&Board::new()).is_none());
    assert_eq!(status(&Board::new()), GameStatus::InProgress);
}

#[test]
fn first_row_reported_when_two_rows_are_complete() {
    // Artificial fixture: X across the top, O across the middle. Single-move
    // play can never produce this, but the scan order must stay observable.
    let board = marked(
        marked(
            Board::new(),
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Mark::X,
        ),
        &[Position::MiddleLeft, Position::Center, Position::MiddleRight],
        Mark::O,
    );
    let win = check_winner(&board).expect("two complete lines");
    assert_eq!(win.mark, Mark::X);
    assert_eq!(win.line.map(Position::index), [0, 1, 2]);
}

#[test]
fn row_reported_before_column() {
    // X holds both the top row and the left column.
    let board = marked(
        Board::new(),
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ],
        Mark::X,
    );
    let win = check_winner(&board).expect("two complete lines");
    assert_eq!(win.line.map(Position::index), [0, 1, 2]);
}

#[test]
fn column_reported_before_diagonal() {
    // X holds both the left column and the main diagonal.
    let board = marked(
        Board::new(),
        &[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
            Position::Center,
            Position::BottomRight,
        ],
        Mark::X,
    );
    let win = check_winner(&board).expect("two complete lines");
    assert_eq!(win.line.map(Position::index), [0, 3, 6]);
}

#[test]
fn apply_rejects_taken_cell_and_leaves_board_unchanged() {
    let board = Board::new().with(Position::Center, Cell::Marked(Mark::X));
    let result = apply(&board, Move::new(Mark::O, Position::Center));
    assert_eq!(result, Err(MoveError::CellTaken(Position::Center)));
    assert_eq!(board.get(Position::Center), Cell::Marked(Mark::X));
    // Rejection is idempotent: retrying fails the same way.
    let retry = apply(&board, Move::new(Mark::O, Position::Center));
    assert_eq!(retry, Err(MoveError::CellTaken(Position::Center)));
}

#[test]
fn apply_rejects_any_cell_once_decided() {
    let board = marked(
        Board::new(),
        &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        Mark::X,
    );
    assert_eq!(
        apply(&board, Move::new(Mark::O, Position::BottomRight)),
        Err(MoveError::GameOver)
    );
    assert_eq!(
        apply(&board, Move::new(Mark::O, Position::Center)),
        Err(MoveError::GameOver)
    );
}

#[test]
fn anti_diagonal_scenario() {
    // X@4, O@0, X@8, O@2, X@6: X completes the anti-diagonal.
    let board = play(&[4, 0, 8, 2, 6]);
    let win = check_winner(&board).expect("X wins");
    assert_eq!(win.mark, Mark::X);
    assert_eq!(win.line.map(Position::index), [2, 4, 6]);
    assert_eq!(status(&board), GameStatus::Won(Mark::X));
}

#[test]
fn nine_alternating_moves_with_no_line_is_a_draw() {
    let board = play(&[0, 4, 2, 1, 3, 5, 7, 6, 8]);
    assert!(is_full(&board));
    assert!(check_winner(&board).is_none());
    assert!(is_draw(&board));
    assert_eq!(status(&board), GameStatus::Drawn);
    assert!(Position::open_cells(&board).is_empty());
}

#[test]
fn mark_parity_derives_turn_order() {
    assert_eq!(Mark::for_move(0), Mark::X);
    assert_eq!(Mark::for_move(1), Mark::O);
    assert_eq!(Mark::for_move(2), Mark::X);
    assert_eq!(Mark::for_move(7), Mark::O);
    assert_eq!(Mark::X.opponent(), Mark::O);
}
