// tests/env_characterization.rs
#![forbid(unsafe_code)]

/**
 * Environment characterization tests.
 *
 * Purpose:
 * - Lock in observable transition, reward, and lifecycle behavior.
 * - Catch regressions in seeding, pad clamping, and terminal handling.
 *
 * What is tested:
 * - Reset layout: one ball in the top row, a left-aligned pad span below.
 * - Deterministic trajectories for identical `(seed, config, actions)`.
 * - Invalid raw action ids rejected with no state mutation.
 * - Lifecycle guards: step before reset and step after a miss both error.
 * - Catch respawn (+1, episode continues) and miss termination (-1).
 * - The `Environment` trait drives a full episode through dynamic dispatch.
 *
 * How the tests work:
 * - They compare observable state (snapshots, ball, pad_loc, outcomes)
 *   rather than private fields, so internals can be refactored freely.
 * - Deterministic seeds and bounded loops keep them fast.
 */
use catch_env::env::{Action, CatchConfig, EnvError, Environment, GridWorld, InfoValue};

fn ones_in_row(env: &GridWorld, row: usize) -> usize {
    env.snapshot().row(row).iter().filter(|&&v| v != 0).count()
}

/// Action that walks the pad span toward the ball column.
fn chase(env: &GridWorld) -> Action {
    let ball = env.ball().col;
    let start = env.pad_loc();
    let end = start + env.config().pad_width;
    if ball < start {
        Action::Left
    } else if ball >= end {
        Action::Right
    } else {
        Action::Still
    }
}

#[test]
fn reset_places_single_ball_and_left_aligned_pad() {
    let configs = [
        CatchConfig::new(5, 5, 1),
        CatchConfig::new(2, 3, 2),
        CatchConfig::new(7, 4, 4),
        CatchConfig::new(3, 1, 1),
    ];

    for cfg in configs {
        let mut env = GridWorld::new_with_config(cfg, 20260823).unwrap();
        let grid = env.reset();

        assert_eq!(grid.shape(), (cfg.height, cfg.width));
        assert_eq!(grid.row(0).iter().filter(|&&v| v != 0).count(), 1);

        let bottom = grid.row(cfg.height - 1);
        assert!(bottom[..cfg.pad_width].iter().all(|&v| v == 1));
        assert!(bottom[cfg.pad_width..].iter().all(|&v| v == 0));
        assert_eq!(env.pad_loc(), 0);
        assert_eq!(env.ball().row, 0);

        // Ball + pad span are the only occupied cells.
        assert_eq!(grid.count_ones(), cfg.pad_width + 1);
    }
}

#[test]
fn invalid_dimensions_are_rejected_at_construction() {
    let bad = [
        CatchConfig::new(1, 5, 1), // no airborne row above the pad
        CatchConfig::new(5, 0, 1),
        CatchConfig::new(5, 3, 4), // pad wider than the board
        CatchConfig::new(5, 3, 0),
    ];

    for cfg in bad {
        assert!(matches!(cfg.validate(), Err(EnvError::InvalidConfig(_))));
        assert!(matches!(
            GridWorld::new_with_config(cfg, 1),
            Err(EnvError::InvalidConfig(_))
        ));
    }

    // The smallest legal board is fine.
    assert!(GridWorld::new_with_config(CatchConfig::new(2, 1, 1), 1).is_ok());
}

#[test]
fn step_info_is_an_empty_extensible_mapping() {
    let mut env = GridWorld::new(3);
    env.reset();

    let out = env.step(Action::Still).unwrap();
    assert!(out.info.is_empty());
    assert_eq!(out.info.len(), 0);

    // Adapters layer their own entries onto the same map type; inserting an
    // existing key replaces it.
    let mut info = out.info;
    info.insert("episode", InfoValue::I64(1));
    info.insert("episode", InfoValue::I64(2));
    assert_eq!(info.len(), 1);
    assert_eq!(info.get("episode"), Some(&InfoValue::I64(2)));
    assert_eq!(info.get("missing"), None);
}

#[test]
fn deterministic_episode_for_same_seed_and_actions() {
    let mut e1 = GridWorld::new(20260228);
    let mut e2 = GridWorld::new(20260228);

    assert_eq!(e1.reset(), e2.reset());

    let actions = [0u8, 2, 2, 1, 0, 2, 1, 1, 0, 0, 2, 0, 1, 2, 2, 0];
    for &id in actions.iter().cycle().take(64) {
        let r1 = e1.step_id(id);
        let r2 = e2.step_id(id);
        assert_eq!(r1, r2);

        if e1.is_done() {
            assert!(e2.is_done());
            assert_eq!(e1.reset(), e2.reset());
        }
    }
}

#[test]
fn reseeding_reproduces_the_starting_board() {
    let mut env = GridWorld::new(42);
    let first = env.reset();

    env.seed(42);
    let second = env.reset();

    assert_eq!(first, second);
}

#[test]
fn reset_is_idempotent_and_resamples_the_ball_column() {
    let mut env = GridWorld::new(7);

    // Two resets in a row both yield valid starting states.
    for _ in 0..2 {
        let grid = env.reset();
        assert_eq!(env.pad_loc(), 0);
        assert_eq!(env.ball().row, 0);
        assert_eq!(grid.row(0).iter().filter(|&&v| v != 0).count(), 1);
        assert_eq!(grid.get(0, env.ball().col), 1);
    }
}

#[test]
fn invalid_action_id_is_rejected_without_mutation() {
    let mut env = GridWorld::new(4242);
    env.reset();

    let before_grid = env.snapshot();
    let before_ball = env.ball();
    let before_pad = env.pad_loc();

    for id in [3u8, 4, 255] {
        assert_eq!(env.step_id(id), Err(EnvError::InvalidAction(id)));
    }

    assert_eq!(env.snapshot(), before_grid);
    assert_eq!(env.ball(), before_ball);
    assert_eq!(env.pad_loc(), before_pad);
    assert!(!env.is_done());
}

#[test]
fn step_before_first_reset_is_rejected() {
    let mut env = GridWorld::new(7);
    assert_eq!(env.step(Action::Still), Err(EnvError::NotReset));
    assert_eq!(env.step_id(0), Err(EnvError::NotReset));
}

#[test]
fn miss_terminates_and_further_steps_are_rejected_until_reset() {
    let mut env = GridWorld::new(99);
    env.reset();

    // Keep the pad away from the ball column: flee right if the ball is at
    // column 0 (where the pad starts), otherwise stand still at column 0.
    let flee = if env.ball().col == 0 {
        Action::Right
    } else {
        Action::Still
    };

    let mut last = None;
    for _ in 0..env.config().height - 1 {
        last = Some(env.step(flee).unwrap());
    }

    let out = last.unwrap();
    assert_eq!(out.reward, -1);
    assert!(out.done);
    assert!(env.is_done());
    assert_eq!(env.ball().row, env.config().height - 1);

    // The board is left as-is: ball resting in the bottom row next to the pad.
    assert_eq!(ones_in_row(&env, env.config().height - 1), env.config().pad_width + 1);

    assert_eq!(env.step(Action::Still), Err(EnvError::EpisodeOver));
    assert_eq!(env.step_id(1), Err(EnvError::EpisodeOver));

    env.reset();
    assert!(env.step(Action::Still).is_ok());
}

#[test]
fn catch_rewards_plus_one_and_respawns_without_terminating() {
    let mut env = GridWorld::new(31337);
    env.reset();

    // Chase until the ball reaches the bottom row; the pad always arrives in
    // time on the default board.
    let mut out = None;
    for _ in 0..env.config().height - 1 {
        let a = chase(&env);
        out = Some(env.step(a).unwrap());
    }

    let out = out.unwrap();
    assert_eq!(out.reward, 1);
    assert!(!out.done);
    assert!(!env.is_done());
    assert!(out.info.is_empty());

    // A fresh ball is already in the top row.
    assert_eq!(env.ball().row, 0);
    assert_eq!(out.grid.row(0).iter().filter(|&&v| v != 0).count(), 1);
}

#[test]
fn airborne_steps_reward_zero_and_rewards_stay_in_range() {
    let mut env = GridWorld::new(5150);
    env.reset();

    for i in 0..200usize {
        if env.is_done() {
            env.reset();
        }
        let before_row = env.ball().row;
        let out = env.step_id((i % 3) as u8).unwrap();

        assert!(matches!(out.reward, -1 | 0 | 1));
        assert_eq!(out.done, out.reward == -1);
        if out.reward == 0 {
            assert_eq!(env.ball().row, before_row + 1);
        }
    }
}

#[test]
fn environment_trait_drives_a_full_episode() {
    fn run_episode(env: &mut dyn Environment) -> u64 {
        env.seed(1234);
        env.reset();
        assert_eq!(env.observation_shape(), (5, 5));
        assert_eq!(env.action_dim(), 3);
        assert!(!env.render_ascii().is_empty());

        let mut steps = 0u64;
        for i in 0..100usize {
            match env.step_id((i % 3) as u8) {
                Ok(out) => {
                    steps += 1;
                    assert!(matches!(out.reward, -1 | 0 | 1));
                    if out.done {
                        break;
                    }
                }
                Err(e) => panic!("unexpected step error: {e}"),
            }
        }
        steps
    }

    let mut env = GridWorld::new(1);
    let steps = run_episode(&mut env);
    // A miss can only happen once the ball has crossed the whole board.
    assert!(steps >= 4);
}
