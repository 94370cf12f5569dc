//! Flap Gap - a side-scrolling flap-to-survive arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, gap generation, game state)
//! - `renderer`: Frame layout math + Canvas2D rendering
//! - `platform`: Browser/native platform abstraction (asset loading)
//! - `scores`: Best/last score bookkeeping and persistence

pub mod platform;
pub mod renderer;
pub mod scores;
pub mod sim;

pub use scores::ScoreBoard;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate (Hz)
    pub const TICKS_PER_SECOND: f32 = 50.0;
    /// Fixed simulation timestep in seconds
    pub const TICK_DT: f32 = 1.0 / TICKS_PER_SECOND;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 8;

    /// Horizontal scroll distance per tick
    pub const SCROLL_SPEED: f32 = 5.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.35;
    /// Vertical velocity set by a boost input (negative = up)
    pub const BOOST_VELOCITY: f32 = -10.0;

    /// Horizontal spacing between obstacle slots
    pub const OBSTACLE_STEP: f32 = 256.0;
    /// Width of the band at the start of each slot where collision is tested
    pub const COLLISION_WINDOW: f32 = 100.0;
    /// Sprite's fixed horizontal screen position
    pub const SPRITE_X: f32 = 100.0;
    /// The first obstacle indices are fully open so every run starts fair
    pub const SAFE_START_SLOTS: u64 = 3;

    /// Noise-domain distance between consecutive obstacle indices
    pub const NOISE_SPACING: f32 = 10.0;
    /// Noise-domain offset separating the center and spread sample regions
    pub const NOISE_SPREAD_OFFSET: f32 = 1000.0;

    /// Gap center range (fraction of viewport height)
    pub const GAP_CENTER_MIN: f32 = 0.3;
    pub const GAP_CENTER_MAX: f32 = 0.7;
    /// Gap half-spread range (fraction of viewport height)
    pub const GAP_HALF_SPREAD_MIN: f32 = 0.05;
    pub const GAP_HALF_SPREAD_MAX: f32 = 0.35;

    /// Viewport height assumed before the shell reports a real one
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Remap `v` from [from_lo, from_hi] to [to_lo, to_hi]
#[inline]
pub fn remap(v: f32, from_lo: f32, from_hi: f32, to_lo: f32, to_hi: f32) -> f32 {
    (v - from_lo) / (from_hi - from_lo) * (to_hi - to_lo) + to_lo
}
