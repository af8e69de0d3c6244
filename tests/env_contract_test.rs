//! Controller-facing contract: reset, step, rewards and the 12-value observation.

use tui_snake::core::{GameState, SnakeConfig, SnakeError};
use tui_snake::types::{Direction, Position, Status, REWARD_DEATH, REWARD_FOOD, REWARD_STEP};

fn default_game(seed: u32) -> GameState {
    GameState::new(SnakeConfig::default().with_seed(seed).with_render(false)).unwrap()
}

#[test]
fn reset_starts_centered_with_three_segments() {
    for seed in [1, 2, 3, 1234] {
        let mut game = default_game(seed);
        let obs = game.reset();

        assert_eq!((game.grid_width(), game.grid_height()), (32, 24));
        assert_eq!(game.len(), 3);
        assert_eq!(game.head(), Position::new(16, 12));
        assert_eq!(game.score(), 0);
        assert!(!game.is_done());
        assert_eq!(obs.len(), 12);
        assert!(!game.snake().contains(&game.food()));
    }
}

#[test]
fn three_moves_right_from_center() {
    let mut game = default_game(5);
    game.reset();
    // Keep food out of the path so every step is a plain move.
    game.debug_set_food(Position::new(0, 0));

    let mut heads = Vec::new();
    for _ in 0..3 {
        let step = game.step(0).unwrap();
        assert!(!step.done);
        assert_eq!(step.reward, REWARD_STEP);
        heads.push(game.head());
    }
    assert_eq!(
        heads,
        vec![Position::new(17, 12), Position::new(18, 12), Position::new(19, 12)]
    );
}

#[test]
fn driving_into_left_wall_ends_episode() {
    let mut game = default_game(11);
    game.reset();

    // Turn up, then head left until the head sits on x == 0.
    let mut step = game.step(Direction::Up.ordinal() as i64).unwrap();
    assert!(!step.done);
    while game.head().x > 0 {
        step = game.step(Direction::Left.ordinal() as i64).unwrap();
        assert!(!step.done, "died early at {:?}", game.head());
    }
    let score_before = step.info.score;

    let last = game.step(Direction::Left.ordinal() as i64).unwrap();
    assert!(last.done);
    assert_eq!(last.reward, REWARD_DEATH);
    assert_eq!(last.info.score, score_before);
    assert_eq!(game.status(), Status::Terminated);

    // The observation describes the terminal state: the head is off-grid.
    assert_eq!(game.head().x, -1);
    assert_eq!(last.observation.direction(), &[0, 1, 0, 0]);
}

#[test]
fn stepping_a_finished_episode_requires_reset() {
    let mut game = default_game(3);
    game.debug_set_snake(
        &[Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
        Direction::Left,
    );
    assert!(game.step(1).unwrap().done);
    assert!(matches!(game.step(1), Err(SnakeError::InvalidState(_))));

    let obs = game.reset();
    assert_eq!(obs.direction(), &[1, 0, 0, 0]);
    assert!(game.step(0).is_ok());
}

#[test]
fn eating_grows_and_scores() {
    let mut game = default_game(8);
    game.debug_set_food(Position::new(17, 12));

    let step = game.step(0).unwrap();
    assert_eq!(step.reward, REWARD_FOOD);
    assert_eq!(step.info.score, 1);
    assert_eq!(game.len(), 4);
    assert_ne!(game.food(), Position::new(17, 12));
    assert!(!game.snake().contains(&game.food()));
}

#[test]
fn spaces_agree_with_step_mapping() {
    let game = default_game(1);
    let actions = game.action_space();
    assert_eq!(actions.n, 4);

    for (action, label) in &actions.actions {
        let mut g = default_game(1);
        g.debug_set_food(Position::new(0, 0));
        g.step(*action as i64).unwrap();
        let expected = match *label {
            "RIGHT" | "LEFT" => Direction::Right, // LEFT reverses and is ignored
            "UP" => Direction::Up,
            "DOWN" => Direction::Down,
            other => panic!("unexpected label {}", other),
        };
        assert_eq!(g.direction(), expected, "action {} ({})", action, label);
    }

    assert_eq!(game.observation_space().shape, [12]);
}

#[test]
fn step_serializes_for_agents() {
    let mut game = default_game(2);
    game.debug_set_food(Position::new(0, 0));
    let step = game.step(0).unwrap();

    let json = serde_json::to_value(step).unwrap();
    assert_eq!(json["done"], false);
    assert_eq!(json["info"]["score"], 0);
    assert_eq!(json["observation"].as_array().map(|a| a.len()), Some(12));
}

#[test]
fn invalid_configs_are_rejected() {
    let zero_cell = SnakeConfig {
        cell_size: 0,
        ..SnakeConfig::default()
    };
    assert!(matches!(GameState::new(zero_cell), Err(SnakeError::InvalidConfig(_))));

    let too_small = SnakeConfig::with_grid(2, 1);
    assert!(matches!(GameState::new(too_small), Err(SnakeError::InvalidConfig(_))));
}
