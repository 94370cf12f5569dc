//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded noise only (no ambient RNG, no clocks)
//! - No rendering or platform dependencies

pub mod clock;
pub mod gap;
pub mod noise;
pub mod state;
pub mod tick;

pub use clock::SimClock;
pub use gap::{Gap, gap_for};
pub use noise::{NoiseSeed, noise2};
pub use state::{GameState, Mode, Run, Score, Sprite};
pub use tick::tick;
