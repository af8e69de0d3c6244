//! Rule invariants checked over many seeded random episodes.

use tui_snake::core::{FoodRng, GameState, SimpleRng, SnakeConfig, SnakeError, Step};
use tui_snake::types::{Direction, REWARD_DEATH, REWARD_FOOD, REWARD_STEP, TIMEOUT_FACTOR};

fn play_random(
    seed: u32,
    grid: (u32, u32),
    episodes: u32,
    mut check: impl FnMut(&GameState, &GameState, i64, &Step),
) {
    let config = SnakeConfig::with_grid(grid.0, grid.1).with_seed(seed);
    let mut game = GameState::new(config).unwrap();
    let mut policy = SimpleRng::new(seed ^ 0x5eed);

    for _ in 0..episodes {
        game.reset();
        loop {
            // Include out-of-range actions.
            let action = policy.next_range(6) as i64 - 1;
            let before = game.clone();
            let step = match game.step(action) {
                Ok(step) => step,
                Err(SnakeError::ResourceExhausted { .. }) => break,
                Err(e) => panic!("unexpected error: {}", e),
            };
            check(&before, &game, action, &step);
            if step.done {
                break;
            }
        }
    }
}

#[test]
fn food_is_never_on_the_snake() {
    play_random(1, (12, 10), 50, |_, after, _, step| {
        if !step.done {
            assert!(!after.snake().contains(&after.food()));
            assert!(after.food().in_bounds(12, 10));
        }
    });
}

#[test]
fn length_grows_only_when_eating() {
    play_random(2, (10, 10), 50, |before, after, _, step| {
        if step.done {
            return;
        }
        if step.reward == REWARD_FOOD {
            assert_eq!(after.len(), before.len() + 1);
            assert_eq!(after.score(), before.score() + 1);
        } else {
            assert_eq!(step.reward, REWARD_STEP);
            assert_eq!(after.len(), before.len());
            assert_eq!(after.score(), before.score());
        }
    });
}

#[test]
fn direction_never_reverses_in_one_step() {
    play_random(3, (16, 16), 50, |before, after, action, _| {
        assert_ne!(after.direction(), before.direction().opposite());
        match Direction::from_action(action) {
            Some(d) if d != before.direction().opposite() => assert_eq!(after.direction(), d),
            _ => assert_eq!(after.direction(), before.direction()),
        }
    });
}

#[test]
fn terminal_steps_match_collision_or_timeout() {
    play_random(4, (8, 8), 80, |_, after, _, step| {
        let head = after.head();
        let collided = after.is_collision(head);
        // The limit is checked before the tail is dropped.
        let checked_len = if !step.done && step.reward == REWARD_STEP {
            after.len() + 1
        } else {
            after.len()
        };
        let timed_out = after.frame() > TIMEOUT_FACTOR * checked_len as u32;
        if step.done {
            assert_eq!(step.reward, REWARD_DEATH);
            assert!(collided || timed_out);
        } else {
            assert!(!collided);
            assert!(!timed_out);
        }
    });
}

#[test]
fn observations_are_binary_with_one_hot_direction() {
    play_random(5, (9, 7), 30, |_, after, _, step| {
        let obs = step.observation;
        assert_eq!(obs.as_slice().len(), 12);
        assert!(obs.as_slice().iter().all(|&v| v <= 1));
        assert_eq!(obs.direction().iter().map(|&v| v as u32).sum::<u32>(), 1);
        assert_eq!(obs.direction()[after.direction().ordinal()], 1);
    });
}

#[test]
fn collision_predicate_matches_definition() {
    let mut game = GameState::new(SnakeConfig::with_grid(6, 5).with_seed(9)).unwrap();
    game.step(2).unwrap();

    let body: Vec<_> = game.snake().iter().skip(1).copied().collect();
    for y in -1..=5 {
        for x in -1..=6 {
            let p = tui_snake::types::Position::new(x, y);
            let expected = !(0..6).contains(&x) || !(0..5).contains(&y) || body.contains(&p);
            assert_eq!(game.is_collision(p), expected, "{:?}", p);
        }
    }
    // The head itself is not a collision.
    assert!(!game.is_collision(game.head()));
}

#[test]
fn same_seed_replays_identically() {
    let run = |seed: u32| {
        let mut scores = Vec::new();
        play_random(seed, (10, 8), 5, |_, after, _, step| {
            if step.done {
                scores.push((after.score(), after.frame()));
            }
        });
        scores
    };
    assert_eq!(run(77), run(77));
}
