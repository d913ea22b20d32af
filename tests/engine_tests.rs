//! End-to-end game scenarios.
//!
//! These drive `GameEngine` through complete games the way a presentation
//! layer would: one column index per input event, reacting to the outcome.

use connect_four::board::{Cell, Grid, Position};
use connect_four::core::{Player, PlayerId};
use connect_four::game::{DropOutcome, GameEngine, GameStatus, IgnoredReason};
use connect_four::rules::{AnchoredQuadScan, Direction, PlacedPieceScan};

fn new_game(height: usize, width: usize) -> GameEngine {
    GameEngine::new(height, width, Player::first("red"), Player::second("blue"))
}

/// Play columns in order, asserting every drop but the last continues.
/// Returns the last outcome.
fn play(game: &mut GameEngine, columns: &[usize]) -> DropOutcome {
    let (last, rest) = columns.split_last().expect("at least one column");
    for &col in rest {
        assert_eq!(game.attempt_drop(col), DropOutcome::Continue, "column {}", col);
    }
    game.attempt_drop(*last)
}

/// Forty-two drops on a 6x7 board that never line up four.
const TIE_SEQUENCE: [usize; 42] = [
    5, 4, 5, 0, 6, 2, 4, 5, 5, 0, 4, 1, 1, 0, 4, 5, 6, 5, 3, 1, 1, 2, 2, 6, 2, 6, 6, 3, 6, 2, 0,
    3, 0, 3, 3, 4, 3, 1, 4, 2, 1, 0,
];

// =============================================================================
// Wins
// =============================================================================

/// Player 1 stacks column 0 while player 2 answers in column 1.
#[test]
fn test_vertical_win_scenario() {
    let mut game = new_game(6, 7);

    for _ in 0..3 {
        assert_eq!(game.attempt_drop(0), DropOutcome::Continue);
        assert_eq!(game.attempt_drop(1), DropOutcome::Continue);
    }
    let outcome = game.attempt_drop(0);

    assert_eq!(outcome, DropOutcome::Won(PlayerId::ONE));
    assert_eq!(outcome.end_message().as_deref(), Some("Player 1 won!"));
    assert_eq!(game.status(), GameStatus::Won(PlayerId::ONE));
    assert_eq!(game.current_player().label, "red");

    let line = game.winning_line().unwrap();
    assert_eq!(line.direction, Direction::Vertical);
    assert_eq!(line.cells[0], Position::new(2, 0));
    assert_eq!(line.cells[3], Position::new(5, 0));
}

/// Player 2 can win too; the turn does not switch on the winning drop.
#[test]
fn test_second_player_wins() {
    let mut game = new_game(6, 7);

    let outcome = play(&mut game, &[6, 0, 6, 1, 5, 2, 6, 3]);

    assert_eq!(outcome, DropOutcome::Won(PlayerId::TWO));
    assert_eq!(game.current_player().id, PlayerId::TWO);
    assert_eq!(game.winning_line().unwrap().direction, Direction::Horizontal);
}

/// Rising diagonal from bottom-left, found as a down-left line.
#[test]
fn test_diagonal_win_scenario() {
    let mut game = new_game(6, 7);

    // Builds the staircase so player 1 ends on (5,0) (4,1) (3,2) (2,3).
    let outcome = play(&mut game, &[0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3]);

    assert_eq!(outcome, DropOutcome::Won(PlayerId::ONE));
    let line = game.winning_line().unwrap();
    assert_eq!(line.direction, Direction::DiagonalDownLeft);
    for pos in [
        Position::new(5, 0),
        Position::new(4, 1),
        Position::new(3, 2),
        Position::new(2, 3),
    ] {
        assert!(line.contains(pos), "{} missing from line", pos);
    }
}

/// Falling diagonal from top-left.
#[test]
fn test_down_right_diagonal_win() {
    let mut game = new_game(6, 7);

    let outcome = play(&mut game, &[3, 2, 2, 1, 1, 0, 1, 0, 0, 6, 0]);

    assert_eq!(outcome, DropOutcome::Won(PlayerId::ONE));
    assert_eq!(
        game.winning_line().unwrap().direction,
        Direction::DiagonalDownRight
    );
}

/// On a 4x4 board a bottom row that is only partly player 1's is no win.
#[test]
fn test_partial_row_is_not_a_win() {
    let mut game = new_game(4, 4);

    // Player 1 takes (3,0) (3,1) (3,2); player 2 takes (3,3) first.
    assert_eq!(play(&mut game, &[0, 3, 1, 0, 2]), DropOutcome::Continue);
    assert!(!game.check_for_win());
    assert!(AnchoredQuadScan::scan(game.grid(), PlayerId::ONE).is_none());

    // Same three pieces, but this time player 1 also gets (3,3).
    let mut game = new_game(4, 4);
    assert_eq!(play(&mut game, &[0, 0, 1, 1, 2, 2, 3]), DropOutcome::Won(PlayerId::ONE));
}

/// Boards narrower or shorter than four never produce a win.
#[test]
fn test_small_board_never_wins() {
    let mut game = new_game(3, 3);

    let outcome = play(&mut game, &[0, 1, 0, 1, 0, 1, 2, 2, 2]);

    assert_eq!(outcome, DropOutcome::Tie);
    assert!(game.winning_line().is_none());
}

// =============================================================================
// Ties
// =============================================================================

#[test]
fn test_full_board_tie() {
    let mut game = new_game(6, 7);

    let outcome = play(&mut game, &TIE_SEQUENCE);

    assert_eq!(outcome, DropOutcome::Tie);
    assert_eq!(outcome.end_message().as_deref(), Some("Tie!"));
    assert!(game.is_board_full());
    assert!(game.is_game_over());
    assert_eq!(game.status(), GameStatus::Tie);
    // The last of 42 drops is player 2's, and a tie does not pass the turn.
    assert_eq!(game.current_player().id, PlayerId::TWO);
    assert!(AnchoredQuadScan::scan(game.grid(), PlayerId::ONE).is_none());
    assert!(AnchoredQuadScan::scan(game.grid(), PlayerId::TWO).is_none());
}

/// Filling the last cell with a winning line reports the win, not a tie.
#[test]
fn test_win_on_last_cell_beats_tie() {
    let mut game = new_game(4, 4);

    // The sixteenth drop fills (0,3) and completes player 2's anti-diagonal.
    let outcome = play(
        &mut game,
        &[1, 0, 3, 2, 2, 1, 0, 2, 0, 1, 0, 1, 2, 3, 3, 3],
    );

    assert_eq!(outcome, DropOutcome::Won(PlayerId::TWO));
    assert!(game.is_board_full());
    assert_eq!(game.status(), GameStatus::Won(PlayerId::TWO));
    assert_eq!(
        game.winning_line().unwrap().direction,
        Direction::DiagonalDownLeft
    );
}

// =============================================================================
// Ignored drops
// =============================================================================

#[test]
fn test_ignored_drops_change_nothing() {
    let mut game = new_game(6, 7);

    for _ in 0..6 {
        game.attempt_drop(4);
    }
    let grid_before = game.grid().clone();
    let player_before = game.current_player().id;

    for _ in 0..5 {
        assert_eq!(
            game.attempt_drop(4),
            DropOutcome::Ignored(IgnoredReason::ColumnFull)
        );
    }

    assert_eq!(game.grid(), &grid_before);
    assert_eq!(game.current_player().id, player_before);
    assert!(!game.is_game_over());
    assert!(!game.legal_columns().contains(&4));
}

#[test]
fn test_drops_after_game_over_are_ignored() {
    let mut game = new_game(6, 7);
    play(&mut game, &[0, 1, 0, 1, 0, 1, 0]);
    let grid_before = game.grid().clone();

    for col in 0..7 {
        assert_eq!(
            game.attempt_drop(col),
            DropOutcome::Ignored(IgnoredReason::GameOver)
        );
    }

    assert_eq!(game.grid(), &grid_before);
    assert_eq!(game.status(), GameStatus::Won(PlayerId::ONE));
}

// =============================================================================
// New games
// =============================================================================

#[test]
fn test_restart_after_win() {
    let mut game = new_game(6, 7);
    play(&mut game, &[0, 1, 0, 1, 0, 1, 0]);

    let mut next = game.restart();

    assert_eq!(next.grid(), &Grid::new(6, 7));
    assert_eq!(next.status(), GameStatus::Active(PlayerId::ONE));
    assert_eq!(next.attempt_drop(0), DropOutcome::Continue);
    assert_eq!(next.grid().get(Position::new(5, 0)), Cell::Occupied(PlayerId::ONE));

    // The finished game is untouched by play in the new one.
    assert!(game.is_game_over());
    assert_eq!(game.grid().occupied_count(), 7);
}

#[test]
fn test_detectors_agree_on_scripted_games() {
    let games: [&[usize]; 4] = [
        &[0, 1, 0, 1, 0, 1, 0],
        &[6, 0, 6, 1, 5, 2, 6, 3],
        &[0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3],
        &TIE_SEQUENCE,
    ];

    for columns in games {
        let mut reference = new_game(6, 7);
        let mut fast = GameEngine::with_detector(
            6,
            7,
            Player::first("red"),
            Player::second("blue"),
            PlacedPieceScan,
        );

        for &col in columns {
            assert_eq!(reference.attempt_drop(col), fast.attempt_drop(col));
        }
        assert_eq!(reference.grid(), fast.grid());
    }
}
