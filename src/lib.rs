//! Quadtree Visualization WASM Module
//!
//! This is the main WASM module for the quadtree painter. It consumes a
//! prebuilt quadtree (cell bounds and leaf points supplied by external
//! construction code) and produces a display list or an SVG document
//! for rendering in the browser.

pub mod models;
pub mod scene;
pub mod renderers;
pub mod api;

// Re-export commonly used types
pub use models::core::*;
pub use scene::{DisplayList, PaintConfig, PaintEngine, RenderPoint, RenderRect};
pub use renderers::{DomRenderer, SvgRenderer};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Quadtree paint WASM module initialized");
}
