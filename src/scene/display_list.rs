//! Display List for Quadtree Rendering
//!
//! This module defines the output structure returned from the paint engine.
//! The DisplayList contains all pre-calculated positions, dimensions, ids,
//! and classes needed to render shapes without any further computation.

use serde::{Deserialize, Serialize};

/// Top-level display list containing all rendering information
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    /// Canvas width in pixels
    pub width: f64,

    /// Canvas height in pixels
    pub height: f64,

    /// One rectangle per quadtree cell, in input order
    pub rects: Vec<RenderRect>,

    /// One circle per leaf point, in input order
    pub points: Vec<RenderPoint>,
}

/// A rectangle for one quadtree cell
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderRect {
    /// Element id derived from the cell identifier (e.g. "node_7")
    pub id: String,

    /// CSS class names to apply
    pub classes: Vec<String>,

    /// X position (left edge)
    pub x: f64,

    /// Y position (top edge)
    pub y: f64,

    /// Width, exactly x2 - x1 of the source cell
    pub w: f64,

    /// Height, exactly y2 - y1 of the source cell
    pub h: f64,

    /// Initial opacity; 0.0 so cells start invisible and are revealed
    /// by external animation code
    pub opacity: f64,

    /// Depth-based fill color, present only when fill_by_depth is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

impl RenderRect {
    /// Space-joined class attribute value.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

/// A circle for one leaf point
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderPoint {
    /// CSS class names to apply: the base point class followed by the
    /// record's own tags
    pub classes: Vec<String>,

    /// Center X coordinate
    pub cx: f64,

    /// Center Y coordinate
    pub cy: f64,

    /// Radius, fixed by configuration regardless of input
    pub r: f64,
}

impl RenderPoint {
    /// Space-joined class attribute value.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}
