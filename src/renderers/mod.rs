//! Renderers module for the quadtree painter
//!
//! This module contains rendering/export logic for converting a computed
//! DisplayList into output formats.

pub mod dom;
pub mod svg;

// Re-export commonly used types
pub use dom::DomRenderer;
pub use svg::{SvgBuilder, SvgRenderer};
