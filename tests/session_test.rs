//! Interaction-surface tests: clicks, display data, replay, invariants.

use tictactoe_rewind::invariants::{HistoryInvariants, InvariantSet};
use tictactoe_rewind::{Cell, GameSession, GameStatus, Mark, MoveError, Position};

fn positions(cells: &[usize]) -> Vec<Position> {
    cells
        .iter()
        .map(|&i| Position::from_index(i).expect("cell index in range"))
        .collect()
}

#[test]
fn click_places_the_mark_whose_turn_it_is() {
    let mut session = GameSession::new();
    session.click(Position::Center).expect("legal move");
    assert_eq!(session.board().get(Position::Center), Cell::Marked(Mark::X));
    session.click(Position::TopLeft).expect("legal move");
    assert_eq!(session.board().get(Position::TopLeft), Cell::Marked(Mark::O));
}

#[test]
fn click_on_taken_cell_is_rejected_and_state_is_unchanged() {
    let mut session = GameSession::new();
    session.click(Position::Center).expect("legal move");
    let before = *session.board();
    assert_eq!(
        session.click(Position::Center),
        Err(MoveError::CellTaken(Position::Center))
    );
    assert_eq!(*session.board(), before);
    assert_eq!(session.history().cursor(), 1);
    assert_eq!(session.next_mark(), Mark::O);
}

#[test]
fn click_after_win_is_rejected() {
    let mut session =
        GameSession::replay(&positions(&[0, 3, 1, 4, 2])).expect("legal sequence");
    assert_eq!(
        session.click(Position::BottomRight),
        Err(MoveError::GameOver)
    );
}

#[test]
fn winning_line_feeds_cell_highlighting() {
    let session =
        GameSession::replay(&positions(&[0, 3, 1, 4, 2])).expect("legal sequence");
    let line = session.winning_line().expect("X won the top row");
    assert_eq!(line.mark, Mark::X);
    assert!(line.contains(Position::TopLeft));
    assert!(line.contains(Position::TopCenter));
    assert!(line.contains(Position::TopRight));
    assert!(!line.contains(Position::Center));
}

#[test]
fn status_line_matches_game_state() {
    let mut session = GameSession::new();
    assert_eq!(session.status_line(), "Next player is: X");
    session.click(Position::Center).expect("legal move");
    assert_eq!(session.status_line(), "Next player is: O");

    let won = GameSession::replay(&positions(&[0, 3, 1, 4, 2])).expect("legal sequence");
    assert_eq!(won.status_line(), "Winner is: X");

    let drawn =
        GameSession::replay(&positions(&[0, 4, 2, 1, 3, 5, 7, 6, 8])).expect("legal sequence");
    assert_eq!(drawn.status(), GameStatus::Drawn);
    assert_eq!(drawn.status_line(), "Game over. Draw!");
}

#[test]
fn replay_rebuilds_a_session() {
    let session = GameSession::replay(&positions(&[4, 0, 8])).expect("legal sequence");
    assert_eq!(session.history().cursor(), 3);
    assert_eq!(session.next_mark(), Mark::O);
}

#[test]
fn replay_propagates_rejection() {
    let err = GameSession::replay(&positions(&[4, 4])).expect_err("second click is illegal");
    assert_eq!(err, MoveError::CellTaken(Position::Center));
}

#[test]
fn invariants_hold_throughout_branching_play() {
    let mut session =
        GameSession::replay(&positions(&[4, 0, 8, 2, 6])).expect("legal sequence");
    assert!(HistoryInvariants::check_all(session.history()).is_ok());

    session.select(2);
    session.click(Position::TopCenter).expect("board reopened");
    assert!(HistoryInvariants::check_all(session.history()).is_ok());

    session.reset();
    assert!(HistoryInvariants::check_all(session.history()).is_ok());
}

#[test]
fn session_round_trips_through_json() {
    let session = GameSession::replay(&positions(&[4, 0])).expect("legal sequence");
    let json = serde_json::to_string(&session).expect("serializes");
    let back: GameSession = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back.board(), session.board());
    assert_eq!(back.history().cursor(), session.history().cursor());
    assert_eq!(back.next_mark(), session.next_mark());
}
