//! Frame layout math
//!
//! Maps scroll state to screen positions: wrapping background tiles, visible
//! obstacle columns, sprite placement and tilt. Pure functions over read-only
//! state so the whole layer is testable without a canvas.

use glam::Vec2;

use crate::consts::{OBSTACLE_STEP, SPRITE_X};
use crate::sim::state::Sprite;

/// One obstacle slot currently visible in the horizontal viewport window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleColumn {
    /// Obstacle index for [`gap_for`](crate::sim::gap::gap_for)
    pub index: u64,
    /// Left edge of the slot in screen pixels
    pub screen_x: f32,
}

/// Horizontal offset of the first background tile for an infinite wrap
///
/// Always in `[0, tile_width)`; the caller draws each tile at
/// `i * tile_width - offset`.
#[inline]
pub fn background_offset(scroll_offset: f32, tile_width: f32) -> f32 {
    scroll_offset.rem_euclid(tile_width)
}

/// Number of background tiles needed to cover the viewport while scrolling
#[inline]
pub fn background_tile_count(viewport_width: f32, tile_width: f32) -> u32 {
    (viewport_width / tile_width).ceil() as u32 + 1
}

/// The obstacle columns overlapping the viewport at the current scroll
pub fn visible_columns(scroll_offset: f32, viewport_width: f32) -> Vec<ObstacleColumn> {
    let slots = (viewport_width / OBSTACLE_STEP).ceil() as u64 + 1;
    let wrap = scroll_offset.rem_euclid(OBSTACLE_STEP);

    (0..slots)
        .map(|i| {
            let world_x = i as f32 * OBSTACLE_STEP + scroll_offset;
            ObstacleColumn {
                index: (world_x / OBSTACLE_STEP).floor() as u64,
                screen_x: i as f32 * OBSTACLE_STEP - wrap,
            }
        })
        .collect()
}

/// Sprite position in screen space (fixed x, simulated y)
#[inline]
pub fn sprite_position(sprite: &Sprite) -> Vec2 {
    Vec2::new(SPRITE_X, sprite.y)
}

/// Sprite rotation in radians, proportional to vertical velocity
#[inline]
pub fn sprite_tilt(sprite: &Sprite) -> f32 {
    sprite.velocity / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_offset_wraps() {
        let tile = 300.0;
        assert_eq!(background_offset(0.0, tile), 0.0);
        assert_eq!(background_offset(50.0, tile), 50.0);
        assert_eq!(background_offset(300.0, tile), 0.0);
        assert_eq!(background_offset(950.0, tile), 50.0);
        let off = background_offset(123_456.0, tile);
        assert!((0.0..tile).contains(&off));
    }

    #[test]
    fn test_tile_count_covers_viewport() {
        assert_eq!(background_tile_count(900.0, 300.0), 4);
        assert_eq!(background_tile_count(901.0, 300.0), 5);
    }

    #[test]
    fn test_columns_at_zero_scroll() {
        let cols = visible_columns(0.0, 1024.0);
        assert_eq!(cols.len(), 5);
        for (i, col) in cols.iter().enumerate() {
            assert_eq!(col.index, i as u64);
            assert_eq!(col.screen_x, i as f32 * OBSTACLE_STEP);
        }
    }

    #[test]
    fn test_columns_follow_scroll() {
        // Scrolled one and a half slots: first column is index 1, half off-screen
        let scroll = OBSTACLE_STEP * 1.5;
        let cols = visible_columns(scroll, 1024.0);
        assert_eq!(cols[0].index, 1);
        assert_eq!(cols[0].screen_x, -OBSTACLE_STEP / 2.0);
        // Indices are contiguous and columns stay one step apart
        for pair in cols.windows(2) {
            assert_eq!(pair[1].index, pair[0].index + 1);
            assert_eq!(pair[1].screen_x - pair[0].screen_x, OBSTACLE_STEP);
        }
    }

    #[test]
    fn test_columns_cover_right_edge() {
        let width = 1024.0;
        for scroll in [0.0, 100.0, 255.9, 256.0, 10_000.0] {
            let cols = visible_columns(scroll, width);
            let last = cols.last().unwrap();
            assert!(
                last.screen_x >= width - OBSTACLE_STEP,
                "gap at right edge for scroll={scroll}"
            );
        }
    }

    #[test]
    fn test_sprite_tilt_follows_velocity() {
        let falling = Sprite {
            y: 0.0,
            velocity: 10.0,
        };
        let boosted = Sprite {
            y: 0.0,
            velocity: -10.0,
        };
        assert_eq!(sprite_tilt(&falling), 1.0);
        assert_eq!(sprite_tilt(&boosted), -1.0);
        assert_eq!(sprite_position(&falling).x, SPRITE_X);
    }
}
