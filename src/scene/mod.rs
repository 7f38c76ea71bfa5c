//! Scene computation
//!
//! This module turns the raw quadtree records into a DisplayList with all
//! positioning, sizing, ids, and classes needed for rendering, either by
//! JavaScript binding DOM attributes directly or by the SVG renderer.

pub mod color;
pub mod display_list;
pub mod engine;

pub use color::{ColorScale, ColorScaleConfig, Rgb, ScaleError};
pub use display_list::{DisplayList, RenderPoint, RenderRect};
pub use engine::{PaintConfig, PaintEngine};
