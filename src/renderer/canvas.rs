//! Canvas2D render adapter (browser)
//!
//! Consumes the current mode each frame and draws it; pure read, no state
//! mutation. Obstacles are recomputed from (seed, index) on every frame
//! rather than cached, which keeps this layer stateless apart from the
//! context and the decoded images.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::platform::Assets;
use crate::renderer::layout::{
    background_offset, background_tile_count, sprite_position, sprite_tilt, visible_columns,
};
use crate::sim::gap::gap_for;
use crate::sim::state::{GameState, Mode, Run};

const TEXT_COLOR: &str = "green";
const TEXT_FONT: &str = "bold 24px VT323";
/// Sprite draw scale relative to its source image
const SPRITE_SCALE: f64 = 1.4;
/// Obstacle sprite draw scales
const OBSTACLE_SCALE_X: f64 = 2.0;
const OBSTACLE_SCALE_Y: f64 = 2.4;

/// Draws the game onto a 2D canvas context
///
/// Exists from the first frame; text-only modes render before the images
/// have resolved, `Playing` draws nothing until [`set_assets`] is called
/// (and is unreachable before then anyway).
///
/// [`set_assets`]: CanvasRenderer::set_assets
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    assets: Option<Assets>,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx, assets: None }
    }

    /// Hand over the decoded images once the asset collaborator resolves
    pub fn set_assets(&mut self, assets: Assets) {
        self.assets = Some(assets);
    }

    /// Render one frame of the current mode
    pub fn render(&self, state: &GameState, width: f64, height: f64) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, width, height);

        match &state.mode {
            Mode::Loading => self.draw_center_text("Loading...", width, height)?,
            Mode::LoadFailed => {
                self.draw_center_text("Failed to load assets - reload the page", width, height)?
            }
            Mode::Menu {
                best_score,
                last_score,
            } => {
                self.draw_center_text("Click to start", width, height)?;
                if let Some(best) = best_score {
                    self.ctx
                        .fill_text(&format!("Best: {best}"), width / 2.0, height / 2.0 + 32.0)?;
                }
                if let Some(last) = last_score {
                    self.ctx
                        .fill_text(&format!("Last: {last}"), width / 2.0, height / 2.0 + 60.0)?;
                }
            }
            Mode::Playing(run) => self.draw_run(run, width, height)?,
        }

        Ok(())
    }

    fn draw_center_text(&self, text: &str, width: f64, height: f64) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(TEXT_COLOR);
        self.ctx.set_font(TEXT_FONT);
        self.ctx.set_text_align("center");
        self.ctx.fill_text(text, width / 2.0, height / 2.0)
    }

    fn draw_run(&self, run: &Run, width: f64, height: f64) -> Result<(), JsValue> {
        let Some(assets) = &self.assets else {
            return Ok(());
        };
        self.draw_background(assets, run, width, height)?;
        self.draw_obstacles(assets, run, width, height)?;
        self.draw_sprite(assets, run)?;
        Ok(())
    }

    /// Horizontally tiled background, wrapping with the scroll offset
    fn draw_background(
        &self,
        assets: &Assets,
        run: &Run,
        width: f64,
        height: f64,
    ) -> Result<(), JsValue> {
        let image = &assets.background;
        let ratio = image.width() as f64 / image.height() as f64;
        let tile_w = height * ratio;

        let offset = background_offset(run.scroll_offset, tile_w as f32) as f64;
        let tiles = background_tile_count(width as f32, tile_w as f32);

        for i in 0..tiles {
            let x = i as f64 * tile_w - offset;
            // Slight horizontal overdraw hides seams between tiles
            self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                image,
                x,
                0.0,
                tile_w + 1.0,
                height,
            )?;
        }
        Ok(())
    }

    /// Sprite at its fixed x, rotated with vertical velocity
    fn draw_sprite(&self, assets: &Assets, run: &Run) -> Result<(), JsValue> {
        let image = &assets.sprite;
        let pos = sprite_position(&run.sprite);
        let w = image.width() as f64 * SPRITE_SCALE;
        let h = image.height() as f64 * SPRITE_SCALE;

        self.ctx.save();
        self.ctx.translate(pos.x as f64, pos.y as f64)?;
        self.ctx.rotate(sprite_tilt(&run.sprite) as f64)?;
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, -w / 2.0, -h / 2.0, w, h)?;
        self.ctx.restore();
        Ok(())
    }

    /// Both halves of every obstacle column visible in the viewport
    fn draw_obstacles(
        &self,
        assets: &Assets,
        run: &Run,
        width: f64,
        height: f64,
    ) -> Result<(), JsValue> {
        let top_img = &assets.obstacle_top;
        let bottom_img = &assets.obstacle_bottom;

        for col in visible_columns(run.scroll_offset, width as f32) {
            let gap = gap_for(run.noise_seed, col.index);
            let x = col.screen_x as f64;

            // Lower half grows downward from the gap's bottom edge
            self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                bottom_img,
                x,
                gap.bottom as f64 * height,
                bottom_img.width() as f64 * OBSTACLE_SCALE_X,
                bottom_img.height() as f64 * OBSTACLE_SCALE_Y,
            )?;
            // Upper half is drawn with negative height, growing upward from
            // the gap's top edge
            self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                top_img,
                x,
                gap.top as f64 * height,
                top_img.width() as f64 * OBSTACLE_SCALE_X,
                -(top_img.height() as f64 * OBSTACLE_SCALE_Y),
            )?;
        }
        Ok(())
    }
}
