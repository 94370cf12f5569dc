//! Async image asset resolution (browser)
//!
//! Loads the fixed set of named visual assets. All-or-nothing: the game
//! leaves `Loading` only when every image decoded, and any failure is
//! surfaced as an explicit error instead of a stalled screen.

use std::fmt;

use js_sys::Promise;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

/// Asset resolution failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetError {
    /// The image element itself could not be created
    ElementCreation,
    /// The named resource failed to fetch or decode
    Load(&'static str),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::ElementCreation => write!(f, "failed to create image element"),
            AssetError::Load(name) => write!(f, "failed to load asset '{name}'"),
        }
    }
}

/// The fixed set of images the renderer draws with
pub struct Assets {
    pub background: HtmlImageElement,
    pub sprite: HtmlImageElement,
    pub obstacle_top: HtmlImageElement,
    pub obstacle_bottom: HtmlImageElement,
}

impl Assets {
    /// Resolve every named resource; fails on the first missing one
    pub async fn load() -> Result<Self, AssetError> {
        Ok(Self {
            background: load_image("background", "assets/background.png").await?,
            sprite: load_image("sprite", "assets/sprite.png").await?,
            obstacle_top: load_image("obstacle-top", "assets/obstacle-top.png").await?,
            obstacle_bottom: load_image("obstacle-bottom", "assets/obstacle-bottom.png").await?,
        })
    }
}

/// Load a single image, resolving when the browser fires onload
async fn load_image(name: &'static str, url: &str) -> Result<HtmlImageElement, AssetError> {
    let image = HtmlImageElement::new().map_err(|_| AssetError::ElementCreation)?;

    let promise = Promise::new(&mut |resolve, reject| {
        let onload = Closure::once_into_js(move |_event: web_sys::Event| {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once_into_js(move |_event: web_sys::Event| {
            let _ = reject.call0(&JsValue::NULL);
        });
        image.set_onload(Some(onload.unchecked_ref()));
        image.set_onerror(Some(onerror.unchecked_ref()));
    });
    image.set_src(url);

    JsFuture::from(promise)
        .await
        .map_err(|_| AssetError::Load(name))?;

    log::info!("loaded asset '{name}'");
    Ok(image)
}
