//! Tests for the game engine's state machine.

use std::collections::HashSet;
use tictac_engine::{
    Board, Controller, Engine, GameEvent, GameMode, Outcome, Player, Square, WINNING_LINES,
    evaluate,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

/// Every board reachable by alternating legal play, terminal ones included.
fn reachable_boards() -> HashSet<Board> {
    fn walk(board: Board, to_move: Player, seen: &mut HashSet<Board>) {
        if !seen.insert(board) {
            return;
        }
        if evaluate(&board).is_terminal() {
            return;
        }
        for index in board.empty_cells().collect::<Vec<_>>() {
            let mut next = board;
            next.place(index, to_move).expect("empty square");
            walk(next, to_move.opponent(), seen);
        }
    }

    let mut seen = HashSet::new();
    walk(Board::new(), Player::X, &mut seen);
    seen
}

#[test]
fn test_x_wins_top_row() {
    let mut engine = Engine::new(GameMode::HumanVsHuman);
    for index in [0, 4, 1, 7, 2] {
        engine.apply_move(index);
    }

    let outcome = engine.outcome();
    assert_eq!(outcome.winner(), Some(Player::X));
    assert_eq!(outcome.line().map(|line| line.cells()), Some([0, 1, 2]));
    assert!(!engine.is_active());
    assert_eq!(engine.turn(), Player::X);
    assert_eq!(engine.tally().wins(Player::X), 1);
    assert_eq!(engine.tally().games(), 1);
}

#[test]
fn test_full_board_without_line_is_draw() {
    assert_eq!(evaluate(&board("XOX XOO OXX")), Outcome::Draw);
}

#[test]
fn test_draw_through_engine_counts_a_tie() {
    let mut engine = Engine::new(GameMode::HumanVsHuman);
    // Reaches X O X / X O O / O X X.
    let mut events = Vec::new();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        events = engine.apply_move(index);
    }
    assert_eq!(events.last(), Some(&GameEvent::Drawn));
    assert_eq!(engine.outcome(), Outcome::Draw);
    assert_eq!(engine.tally().ties(), 1);
    assert!(!engine.is_active());
    assert_eq!(engine.turn(), Player::X);
}

#[test]
fn test_occupied_square_is_a_no_op() {
    let mut engine = Engine::new(GameMode::HumanVsHuman);
    engine.apply_move(4);
    let before = engine.snapshot();

    for _ in 0..3 {
        assert!(engine.apply_move(4).is_empty());
    }
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_out_of_range_is_a_no_op() {
    let mut engine = Engine::new(GameMode::HumanVsComputer);
    let before = engine.snapshot();
    assert!(engine.apply_move(9).is_empty());
    assert!(engine.apply_move(usize::MAX).is_empty());
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_moves_after_game_over_are_ignored() {
    let mut engine = Engine::new(GameMode::HumanVsHuman);
    for index in [0, 4, 1, 7, 2] {
        engine.apply_move(index);
    }
    let before = engine.snapshot();

    for index in 0..9 {
        assert!(engine.apply_move(index).is_empty());
    }
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.board().get(3), Some(Square::Empty));
}

#[test]
fn test_turn_alternates_on_every_accepted_move() {
    let mut engine = Engine::new(GameMode::HumanVsHuman);
    let mut expected = Player::X;
    for index in [4, 0, 8, 2, 1, 7] {
        assert_eq!(engine.turn(), expected);
        assert!(!engine.apply_move(index).is_empty());
        expected = expected.opponent();

        // A rejected move must not flip the turn.
        assert!(engine.apply_move(4).is_empty());
        assert_eq!(engine.turn(), expected);
    }
    assert!(engine.is_active());
}

#[test]
fn test_evaluator_agrees_with_lines_on_reachable_boards() {
    let boards = reachable_boards();
    assert_eq!(boards.len(), 5478);

    for board in boards {
        let holder = |player: Player| {
            WINNING_LINES.iter().copied().find(|line| {
                line.cells()
                    .iter()
                    .all(|&i| board.get(i) == Some(Square::Occupied(player)))
            })
        };
        let full = board.empty_cells().next().is_none();

        match evaluate(&board) {
            Outcome::Win { player, line } => {
                assert_eq!(holder(player), Some(line));
                assert_eq!(holder(player.opponent()), None);
            }
            Outcome::Draw => {
                assert!(full);
                assert_eq!(holder(Player::X), None);
                assert_eq!(holder(Player::O), None);
            }
            Outcome::Undecided => {
                assert!(!full);
                assert_eq!(holder(Player::X), None);
                assert_eq!(holder(Player::O), None);
            }
        }
    }
}

#[test]
fn test_mode_switch_resets_board_but_not_score() {
    let mut engine = Engine::new(GameMode::HumanVsHuman);
    for index in [0, 3, 1, 4, 2] {
        engine.apply_move(index);
    }
    engine.reset(GameMode::HumanVsComputer);

    assert_eq!(engine.mode(), GameMode::HumanVsComputer);
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.tally().wins(Player::X), 1);

    let events = engine.apply_move(0);
    assert!(events.iter().any(|event| matches!(
        event,
        GameEvent::Placed {
            by: Controller::Computer,
            ..
        }
    )));
}

#[test]
fn test_human_vs_human_never_searches() {
    let mut engine = Engine::new(GameMode::HumanVsHuman);
    for index in [0, 4, 8] {
        let events = engine.apply_move(index);
        assert!(events.iter().all(|event| !matches!(
            event,
            GameEvent::Placed {
                by: Controller::Computer,
                ..
            }
        )));
    }
    assert_eq!(engine.board().filled(), 3);
}
