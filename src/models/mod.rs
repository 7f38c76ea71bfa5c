//! Data models for the quadtree painter
//!
//! The quadtree itself is built by external code; these types describe the
//! two record sequences it hands over for rendering.

pub mod core;

pub use core::{CellRecord, LeafRecord, QuadtreeData};
