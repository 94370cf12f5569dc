//! Rendering: pure frame layout math plus the Canvas2D surface
//!
//! `layout` computes where everything goes from read-only state; `canvas`
//! (wasm32 only) draws it. The simulation is never mutated from here.

pub mod layout;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use layout::{ObstacleColumn, background_offset, sprite_position, sprite_tilt, visible_columns};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
