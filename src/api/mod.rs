//! Quadtree Painter WASM API
//!
//! This module provides the JavaScript-facing API for the painter.
//! It includes shared utilities for serialization and error handling,
//! plus the rendering operations themselves.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `render`: Display-list and SVG rendering operations

pub mod helpers;
pub mod render;

// Re-export all public functions to keep a flat public API
pub use render::{compute_display_list, default_paint_config, paint_quadtree, render_svg};
