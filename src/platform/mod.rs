//! Platform abstraction layer
//!
//! Browser-side collaborators the simulation treats as external: async image
//! resolution lives here. The sim never touches these APIs directly.

#[cfg(target_arch = "wasm32")]
pub mod assets;

#[cfg(target_arch = "wasm32")]
pub use assets::{AssetError, Assets};
