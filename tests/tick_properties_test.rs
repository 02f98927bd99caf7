//! Randomised checks of the per-tick invariants.
//!
//! Each game is driven by a seeded stream of keys (with gaps for "no input this tick")
//! until it ends, and every tick is checked against the previous state.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tui_snake::core::{GameState, TickOutcome};
use tui_snake::types::{Direction, GridSize, InputKey, Position};

const KEYS: [Option<InputKey>; 6] = [
    None,
    None,
    Some(InputKey::Up),
    Some(InputKey::Down),
    Some(InputKey::Left),
    Some(InputKey::Right),
];

fn segments(state: &GameState) -> Vec<Position> {
    state.snake().iter().copied().collect()
}

fn assert_no_duplicates(state: &GameState) {
    let unique: HashSet<Position> = state.snake().iter().copied().collect();
    assert_eq!(unique.len(), state.len(), "snake overlaps itself: {:?}", segments(state));
}

fn play(grid: GridSize, seed: u64) -> (TickOutcome, usize) {
    let mut keys = StdRng::seed_from_u64(seed ^ 0xA5A5);
    let mut state = GameState::new(grid, seed);
    let mut ticks = 0;

    loop {
        let key = KEYS[keys.gen_range(0..KEYS.len())];
        let before = state.clone();
        let outcome = state.tick(key);
        ticks += 1;

        match outcome {
            TickOutcome::Crashed(_) => {
                assert_eq!(segments(&state), segments(&before));
                assert_eq!(state.fruit(), before.fruit());
                return (outcome, ticks);
            }
            TickOutcome::Quit => unreachable!("no quit key in the stream"),
            TickOutcome::Moved | TickOutcome::Grew | TickOutcome::Won => {}
        }

        // Never a reversal.
        assert!(!state.direction().is_opposite(before.direction()));
        if let Some(dir) = key.and_then(InputKey::direction) {
            if !dir.is_opposite(before.direction()) {
                assert_eq!(state.direction(), dir);
            }
        }

        // Head moved exactly one unit along the current direction.
        assert_eq!(state.head(), before.head().step(state.direction()));
        let dx = (state.head().x - before.head().x).abs();
        let dy = (state.head().y - before.head().y).abs();
        assert_eq!(dx + dy, 1);
        assert!(grid.contains(state.head()));

        // Length only ever stays or grows by one.
        match outcome {
            TickOutcome::Moved => assert_eq!(state.len(), before.len()),
            _ => assert_eq!(state.len(), before.len() + 1),
        }

        assert_no_duplicates(&state);

        match state.fruit() {
            Some(fruit) => {
                assert!(grid.contains(fruit));
                assert!(!state.is_occupied(fruit), "fruit on snake at {:?}", fruit);
            }
            None => assert_eq!(outcome, TickOutcome::Won),
        }

        if outcome == TickOutcome::Won {
            assert_eq!(state.len(), grid.cell_count());
            return (outcome, ticks);
        }
    }
}

#[test]
fn test_invariants_hold_for_many_random_games() {
    for seed in 0..200 {
        let (outcome, ticks) = play(GridSize::new(10, 10), seed);
        assert!(outcome.is_terminal());
        assert!(ticks > 0);
    }
}

#[test]
fn test_invariants_hold_on_small_and_narrow_grids() {
    for (w, h) in [(1, 5), (5, 1), (2, 2), (3, 3), (20, 20)] {
        for seed in 0..50 {
            play(GridSize::new(w, h), seed);
        }
    }
}

#[test]
fn test_scenario_one_step_right_on_empty_cell() {
    let grid = GridSize::new(10, 10);
    let mut state = GameState::from_parts(
        grid,
        [Position::new(5, 5)],
        Direction::Right,
        Some(Position::new(0, 9)),
        1,
    )
    .unwrap();

    assert_eq!(state.tick(None), TickOutcome::Moved);
    assert_eq!(segments(&state), vec![Position::new(6, 5)]);
}

#[test]
fn test_scenario_one_step_right_onto_fruit() {
    let grid = GridSize::new(10, 10);
    let mut state = GameState::from_parts(
        grid,
        [Position::new(5, 5)],
        Direction::Right,
        Some(Position::new(6, 5)),
        1,
    )
    .unwrap();

    assert_eq!(state.tick(None), TickOutcome::Grew);
    assert_eq!(state.len(), 2);
    assert_eq!(state.head(), Position::new(6, 5));
    let fruit = state.fruit().unwrap();
    assert!(!state.is_occupied(fruit));
}

#[test]
fn test_scenario_reversal_into_tail() {
    let mut state = GameState::from_parts(
        GridSize::new(10, 10),
        [Position::new(2, 2), Position::new(2, 3)],
        Direction::Down,
        Some(Position::new(7, 7)),
        1,
    )
    .unwrap();

    let outcome = state.tick(Some(InputKey::Up));
    assert!(outcome.is_terminal());
    assert_eq!(
        segments(&state),
        vec![Position::new(2, 2), Position::new(2, 3)]
    );
}

#[test]
fn test_scenario_quit_mid_game() {
    let mut state = GameState::new(GridSize::new(10, 10), 5);
    state.tick(Some(InputKey::Left));
    let before = state.clone();

    assert_eq!(state.tick(Some(InputKey::Quit)), TickOutcome::Quit);
    assert_eq!(segments(&state), segments(&before));
    assert_eq!(state.direction(), before.direction());
    assert_eq!(state.fruit(), before.fruit());
}
