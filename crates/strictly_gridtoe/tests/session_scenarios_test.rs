//! End-to-end session scenarios.

use strictly_gridtoe::{
    Cell, Difficulty, GameConfig, GameError, GameSession, GameStatus, Mark, Mode, SymbolPair,
};

fn play(session: &mut GameSession, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        session
            .submit_move(Cell::new(row, col))
            .expect("scripted move should be legal");
    }
}

#[test]
fn test_top_row_win() {
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    play(&mut session, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    assert_eq!(
        session.status(),
        &GameStatus::Won {
            winner: Mark::First,
            cells: vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
        }
    );
    let snapshot = session.snapshot();
    assert_eq!(snapshot.winner().map(|p| p.symbol().as_str()), Some("X"));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    play(
        &mut session,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (2, 1),
            (1, 2),
            (2, 2),
        ],
    );

    assert_eq!(session.status(), &GameStatus::Draw);
    assert!(session.status().winning_cells().is_empty());
    for player in session.players() {
        assert_eq!(*player.score(), 0);
        assert_eq!(*player.games_played(), 1);
    }
}

#[test]
fn test_win_condition_larger_than_board_rejected() {
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    let result = session.apply_settings(GameConfig::default().with_size(4).with_win_condition(5));
    assert!(matches!(result, Err(GameError::InvalidConfiguration(_))));
}

#[test]
fn test_identical_symbols_rejected() {
    assert!(matches!(
        SymbolPair::new("X", "X"),
        Err(GameError::InvalidConfiguration(_))
    ));

    let config: GameConfig =
        serde_json::from_str(r#"{"symbols": {"first": "Z", "second": "Z"}}"#).unwrap();
    assert!(matches!(
        GameSession::new(config),
        Err(GameError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_custom_symbols_flow_to_snapshot() {
    let symbols = SymbolPair::new("A", "B").unwrap();
    let mut session = GameSession::new(GameConfig::default().with_symbols(symbols)).unwrap();
    let snapshot = session.submit_move(Cell::new(2, 1)).unwrap();
    assert_eq!(snapshot.symbol_at(Cell::new(2, 1)), Some("A"));
    assert_eq!(snapshot.current_player().symbol(), "B");
}

#[test]
fn test_larger_board_needs_full_run() {
    let config = GameConfig::default().with_size(6).with_win_condition(4);
    let mut session = GameSession::new(config).unwrap();
    // First builds a vertical run in column 2; Second plays along row 5.
    play(
        &mut session,
        &[(0, 2), (5, 0), (1, 2), (5, 1), (2, 2), (5, 3)],
    );
    assert!(session.status().is_in_progress());

    session.submit_move(Cell::new(3, 2)).unwrap();
    assert_eq!(session.status().winner(), Some(Mark::First));
    assert_eq!(session.status().winning_cells().len(), 4);
}

#[test]
fn test_opponent_replies_until_game_ends() {
    let config = GameConfig::default()
        .with_mode(Mode::HumanVsOpponent)
        .with_difficulty(Difficulty::Minimax);
    let mut session = GameSession::new(config).unwrap();

    // Keep playing the first empty cell; minimax never lets the human win.
    while session.status().is_in_progress() {
        let cell = session.board().empty_cells()[0];
        session.submit_move(cell).unwrap();
    }
    assert_ne!(session.status().winner(), Some(Mark::First));
    assert!(session.history().iter().skip(1).step_by(2).all(|m| m.by_engine));
}

#[test]
fn test_snapshot_serializes() {
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    play(&mut session, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["status"]["state"], "won");
    assert_eq!(json["cells"][0][0], "X");
    assert_eq!(json["players"][0]["score"], 1);
}
