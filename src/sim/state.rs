//! Game mode and state machine surface
//!
//! The whole simulation is one `Mode` value plus the viewport height the
//! collision check measures against. Transitions happen only through the
//! methods here and through [`tick`](crate::sim::tick::tick).

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::scores::ScoreBoard;
use crate::sim::noise::NoiseSeed;

/// Run score: obstacle slots fully passed beyond the safe-start window
pub type Score = u64;

/// The player sprite's vertical state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Vertical position in viewport pixels (down is positive)
    pub y: f32,
    /// Vertical velocity in pixels per tick
    pub velocity: f32,
}

/// One active play session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Cumulative horizontal distance traveled; strictly increasing
    pub scroll_offset: f32,
    pub sprite: Sprite,
    /// Noise seed for this run's obstacle field
    pub noise_seed: NoiseSeed,
    /// Best score carried in from the menu, for end-of-run bookkeeping
    pub best_score: Option<Score>,
}

impl Run {
    /// The sprite's world x position (fixed screen offset + scroll)
    #[inline]
    pub fn lead_x(&self) -> f32 {
        self.scroll_offset + SPRITE_X
    }

    /// Obstacle index the sprite is currently crossing
    #[inline]
    pub fn obstacle_index(&self) -> u64 {
        (self.lead_x() / OBSTACLE_STEP).floor() as u64
    }

    /// Score so far: slots fully passed, not counting the safe-start window
    pub fn score(&self) -> Score {
        self.obstacle_index().saturating_sub(SAFE_START_SLOTS)
    }
}

/// Current game mode; exactly one variant is live at a time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    /// Assets still resolving
    Loading,
    /// An asset failed to resolve; terminal
    LoadFailed,
    /// Between runs, waiting for a start input
    Menu {
        best_score: Option<Score>,
        last_score: Option<Score>,
    },
    /// A run in progress
    Playing(Run),
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub mode: Mode,
    /// Viewport height the collision check measures relative positions against
    pub viewport_height: f32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh state in `Loading`, waiting on the asset collaborator
    pub fn new() -> Self {
        Self {
            mode: Mode::Loading,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }

    /// Record the current viewport height (shell calls this on resize)
    pub fn set_viewport_height(&mut self, height: f32) {
        if height > 0.0 {
            self.viewport_height = height;
        }
    }

    /// All assets resolved: leave `Loading` for the menu
    ///
    /// Carries persisted best/last scores into the menu. A no-op outside
    /// `Loading`.
    pub fn assets_ready(&mut self, scores: &ScoreBoard) {
        if let Mode::Loading = self.mode {
            self.mode = Mode::Menu {
                best_score: scores.best,
                last_score: scores.last,
            };
            log::info!("assets ready, entering menu");
        }
    }

    /// Asset resolution failed: park in the explicit error state
    pub fn load_failed(&mut self) {
        if let Mode::Loading = self.mode {
            self.mode = Mode::LoadFailed;
            log::error!("asset load failed, entering LoadFailed");
        }
    }

    /// Primary action input (click/tap/space)
    ///
    /// In `Menu` this starts a run seeded from the shell-provided entropy;
    /// in `Playing` it boosts immediately, independent of the tick cadence.
    /// In any other mode the input is silently ignored.
    pub fn primary_action(&mut self, entropy: u64) {
        match &mut self.mode {
            Mode::Menu { best_score, .. } => {
                let carried_best = *best_score;
                let seed = NoiseSeed::from_entropy(entropy);
                self.mode = Mode::Playing(Run {
                    scroll_offset: 0.0,
                    sprite: Sprite {
                        y: self.viewport_height / 2.0,
                        velocity: 0.0,
                    },
                    noise_seed: seed,
                    best_score: carried_best,
                });
                log::info!("run started with seed {:?}", seed);
            }
            Mode::Playing(run) => {
                // Immediate velocity reset, not an accumulation
                run.sprite.velocity = BOOST_VELOCITY;
            }
            Mode::Loading | Mode::LoadFailed => {
                log::debug!("primary action ignored outside menu/playing");
            }
        }
    }
}
