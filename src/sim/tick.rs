//! Per-tick physics and collision
//!
//! One call advances the simulation by a single fixed 50 Hz step. Only
//! `Playing` has per-tick behavior; every other mode waits on external
//! events (assets, input).

use crate::consts::*;
use crate::sim::gap::gap_for;
use crate::sim::state::{GameState, Mode};

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState) {
    let Mode::Playing(run) = &mut state.mode else {
        return;
    };

    run.scroll_offset += SCROLL_SPEED;
    run.sprite.velocity += GRAVITY;
    run.sprite.y += run.sprite.velocity;

    // Collision is tested only in the narrow band where the sprite's x
    // crosses an obstacle's horizontal extent
    let lead_x = run.lead_x();
    if lead_x % OBSTACLE_STEP < COLLISION_WINDOW {
        let index = run.obstacle_index();
        // Safe-start slots never collide, whatever the sprite's position
        if index < SAFE_START_SLOTS {
            return;
        }
        let gap = gap_for(run.noise_seed, index);
        let relative_pos = run.sprite.y / state.viewport_height;

        if !gap.contains(relative_pos) {
            let score = run.score();
            let best = run.best_score.map_or(score, |b| b.max(score));
            log::info!("run ended at index {index} with score {score}");
            state.mode = Mode::Menu {
                best_score: Some(best),
                last_score: Some(score),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::ScoreBoard;
    use crate::sim::gap::gap_for;
    use crate::sim::noise::NoiseSeed;
    use crate::sim::state::{Run, Sprite};

    const VIEWPORT_H: f32 = 600.0;

    fn playing_state(run: Run) -> GameState {
        let mut state = GameState::new();
        state.set_viewport_height(VIEWPORT_H);
        state.mode = Mode::Playing(run);
        state
    }

    fn mid_run(scroll_offset: f32) -> Run {
        Run {
            scroll_offset,
            sprite: Sprite {
                y: VIEWPORT_H / 2.0,
                velocity: 0.0,
            },
            noise_seed: NoiseSeed(42),
            best_score: None,
        }
    }

    #[test]
    fn test_tick_noop_outside_playing() {
        let mut state = GameState::new();
        tick(&mut state);
        assert_eq!(state.mode, Mode::Loading);

        state.assets_ready(&ScoreBoard::default());
        let before = state.mode;
        tick(&mut state);
        assert_eq!(state.mode, before);
    }

    #[test]
    fn test_first_tick_physics() {
        let mut state = GameState::new();
        state.set_viewport_height(VIEWPORT_H);
        state.assets_ready(&ScoreBoard::default());
        state.primary_action(1);

        tick(&mut state);
        let Mode::Playing(run) = state.mode else {
            panic!("expected Playing");
        };
        assert_eq!(run.scroll_offset, SCROLL_SPEED);
        assert!((run.sprite.velocity - GRAVITY).abs() < 1e-6);
        assert!((run.sprite.y - (VIEWPORT_H / 2.0 + GRAVITY)).abs() < 1e-6);
    }

    #[test]
    fn test_gravity_accumulates_monotonically() {
        let mut state = playing_state(mid_run(0.0));
        let n = 20;
        for _ in 0..n {
            tick(&mut state);
        }
        let Mode::Playing(run) = state.mode else {
            panic!("expected Playing (safe-start window)");
        };
        assert!((run.sprite.velocity - n as f32 * GRAVITY).abs() < 1e-4);
    }

    #[test]
    fn test_scroll_strictly_increases() {
        let mut state = playing_state(mid_run(0.0));
        let mut prev = 0.0;
        for _ in 0..10 {
            tick(&mut state);
            let Mode::Playing(run) = state.mode else {
                panic!("expected Playing");
            };
            assert!(run.scroll_offset > prev);
            prev = run.scroll_offset;
        }
    }

    #[test]
    fn test_safe_start_never_collides() {
        // lead_x = 100 exactly: index 0, inside the collision window, but the
        // slot is fully open so any y survives
        for y in [-10_000.0, 0.0, VIEWPORT_H * 2.0] {
            let mut run = mid_run(0.0);
            run.sprite.y = y;
            let mut state = playing_state(run);
            tick(&mut state);
            assert!(
                matches!(state.mode, Mode::Playing(_)),
                "collided in safe slot at y={y}"
            );
        }
    }

    #[test]
    fn test_collision_outside_gap_ends_run() {
        // Position the sprite one tick before index 3's collision window with
        // a y forced far outside any possible gap
        let scroll = 3.0 * OBSTACLE_STEP - SPRITE_X - SCROLL_SPEED;
        let mut run = mid_run(scroll);
        run.sprite.y = VIEWPORT_H * 2.0;
        run.sprite.velocity = -GRAVITY; // keep y put through the tick
        let mut state = playing_state(run);

        tick(&mut state);
        match state.mode {
            Mode::Menu {
                best_score,
                last_score,
            } => {
                assert_eq!(last_score, Some(0));
                assert_eq!(best_score, Some(0));
            }
            other => panic!("expected Menu after collision, got {other:?}"),
        }
    }

    #[test]
    fn test_gap_bounds_are_safe_inclusive() {
        let seed = NoiseSeed(7);
        let gap = gap_for(seed, 3);

        let scroll = 3.0 * OBSTACLE_STEP - SPRITE_X - SCROLL_SPEED;
        // Power-of-two height keeps y * h / h exact
        let height = 512.0;

        // Exactly on the top bound after integration: safe
        let mut run = mid_run(scroll);
        run.noise_seed = seed;
        run.sprite.velocity = -GRAVITY;
        run.sprite.y = gap.top * height;
        let mut state = playing_state(run);
        state.set_viewport_height(height);
        tick(&mut state);
        assert!(matches!(state.mode, Mode::Playing(_)));

        // A hair above the top bound: run ends
        let mut run = mid_run(scroll);
        run.noise_seed = seed;
        run.sprite.velocity = -GRAVITY;
        run.sprite.y = (gap.top - 1e-3) * height;
        let mut state = playing_state(run);
        state.set_viewport_height(height);
        tick(&mut state);
        assert!(matches!(state.mode, Mode::Menu { .. }));
    }

    #[test]
    fn test_best_score_bookkeeping() {
        let scroll = 3.0 * OBSTACLE_STEP - SPRITE_X - SCROLL_SPEED;
        let mut run = mid_run(scroll);
        run.best_score = Some(10);
        run.sprite.y = -VIEWPORT_H;
        run.sprite.velocity = -GRAVITY;
        let mut state = playing_state(run);

        tick(&mut state);
        assert_eq!(
            state.mode,
            Mode::Menu {
                best_score: Some(10),
                last_score: Some(0),
            }
        );
    }

    #[test]
    fn test_full_run_cycle_menu_playing_menu() {
        let mut state = GameState::new();
        state.set_viewport_height(VIEWPORT_H);
        state.assets_ready(&ScoreBoard::default());
        state.primary_action(123);

        // No boosts: gravity drags the sprite out of the first real gap
        let mut ticks = 0;
        while matches!(state.mode, Mode::Playing(_)) && ticks < 10_000 {
            tick(&mut state);
            ticks += 1;
        }
        assert!(
            matches!(state.mode, Mode::Menu { last_score: Some(_), .. }),
            "run never ended: {:?}",
            state.mode
        );
    }
}
