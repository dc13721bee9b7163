use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    AttackOutcome, AttackRequest, AttackResponse, Board, BoardError, Game, GameSnapshot,
    GameStatus, Orientation, GRID_SIZE, TOTAL_SHIP_CELLS,
};

#[test]
fn test_snapshot_masks_hidden_ships() {
    let mut board = Board::new();
    board.place_ship(1, Orientation::Horizontal, 1, 1).unwrap();
    let game = Game::from_board(1, board);

    let snapshot = GameSnapshot::from(&game);
    assert_eq!(snapshot.opponent_grid[1][1], ' ');
    assert!(snapshot
        .opponent_grid
        .iter()
        .flatten()
        .all(|&c| c != 'o'));
}

#[test]
fn test_snapshot_shows_resolved_cells() {
    let mut board = Board::new();
    board.place_ship(2, Orientation::Horizontal, 2, 2).unwrap();
    let mut game = Game::from_board(7, board);
    game.attack(0, 0);
    game.attack(2, 2);

    let snapshot = GameSnapshot::from(&game);
    assert_eq!(snapshot.id, 7);
    assert_eq!(snapshot.status, GameStatus::InProgress);
    assert_eq!(snapshot.opponent_grid[0][0], '.');
    assert_eq!(snapshot.opponent_grid[2][2], 'i');
    assert_eq!(snapshot.opponent_grid[2][3], ' ');
}

#[test]
fn test_snapshot_json_shape() {
    let mut rng = SmallRng::seed_from_u64(3);
    let game = Game::new(42, &mut rng).unwrap();
    let value = serde_json::to_value(GameSnapshot::from(&game)).unwrap();

    assert_eq!(value["id"], 42);
    assert_eq!(value["status"], "IN_PROGRESS");
    let grid = value["opponentGrid"].as_array().unwrap();
    assert_eq!(grid.len(), GRID_SIZE);
    for row in grid {
        let row = row.as_array().unwrap();
        assert_eq!(row.len(), GRID_SIZE);
        // every cell of a fresh game renders as hidden water
        assert!(row.iter().all(|c| *c == " "));
    }
}

#[test]
fn test_attack_response_json_shape() {
    let mut board = Board::new();
    board.place_ship(1, Orientation::Horizontal, 5, 5).unwrap();
    let mut game = Game::from_board(1, board);
    let outcome = game.attack(5, 5);

    let response = AttackResponse {
        attack_status: outcome,
        game: GameSnapshot::from(&game),
    };
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["attackStatus"], "KILLED");
    assert_eq!(value["game"]["status"], "FINISHED");
    assert_eq!(value["game"]["opponentGrid"][5][5], "x");
    assert_eq!(value["game"]["opponentGrid"][4][4], ".");
}

#[test]
fn test_snapshot_roundtrip() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut game = Game::new(5, &mut rng).unwrap();
    game.attack(0, 0);

    let snapshot = GameSnapshot::from(&game);
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn test_attack_request_validation() {
    let request: AttackRequest = serde_json::from_str(r#"{"row": 1, "column": 2}"#).unwrap();
    assert_eq!(request.coords().unwrap(), (1, 2));

    let low: AttackRequest = serde_json::from_str(r#"{"row": -1, "column": 0}"#).unwrap();
    assert_eq!(low.coords().unwrap_err(), BoardError::OutOfBounds);

    let high: AttackRequest = serde_json::from_str(r#"{"row": 0, "column": 10}"#).unwrap();
    assert_eq!(high.coords().unwrap_err(), BoardError::OutOfBounds);

    assert!(serde_json::from_str::<AttackRequest>(r#"{"row": 1}"#).is_err());
}

#[test]
fn test_outcome_serialization_names() {
    for (outcome, name) in [
        (AttackOutcome::Invalid, "\"INVALID\""),
        (AttackOutcome::Missed, "\"MISSED\""),
        (AttackOutcome::Injured, "\"INJURED\""),
        (AttackOutcome::Killed, "\"KILLED\""),
    ] {
        assert_eq!(serde_json::to_string(&outcome).unwrap(), name);
    }
}

#[test]
fn test_finished_snapshot_has_no_hidden_cells() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut game = Game::new(1, &mut rng).unwrap();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            game.attack(row, col);
        }
    }
    let snapshot = GameSnapshot::from(&game);
    assert_eq!(snapshot.status, GameStatus::Finished);
    let killed = snapshot
        .opponent_grid
        .iter()
        .flatten()
        .filter(|&&c| c == 'x')
        .count();
    assert_eq!(killed, TOTAL_SHIP_CELLS);
}
