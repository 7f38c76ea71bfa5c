//! Input record types
//!
//! These mirror the shape produced by the quadtree construction collaborator:
//! one `CellRecord` per quadtree node (its bounding box plus depth) and one
//! `LeafRecord` per stored point. Records are consumed read-only in a single
//! pass; nothing here is retained or mutated by the painter.

use serde::{Deserialize, Serialize};

/// One quadtree node's bounding box
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CellRecord {
    /// Node identifier, used to derive the rendered element id
    pub c: u32,

    /// Left edge
    pub x1: f64,

    /// Top edge
    pub y1: f64,

    /// Right edge
    pub x2: f64,

    /// Bottom edge
    pub y2: f64,

    /// Distance from the quadtree root to this node
    pub depth: u32,
}

impl CellRecord {
    /// Width of the cell's bounding box.
    ///
    /// Exactly `x2 - x1`; inverted bounds yield a negative width which
    /// propagates to the output unchanged (display-only, no validation).
    #[inline]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Height of the cell's bounding box, exactly `y2 - y1`.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }
}

/// One point stored in a leaf cell
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LeafRecord {
    /// Point X coordinate
    pub x: f64,

    /// Point Y coordinate
    pub y: f64,

    /// Space-separated classification tags, appended to the base point class
    #[serde(default)]
    pub classes: String,
}

/// The two record sequences handed over by the quadtree builder
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct QuadtreeData {
    /// Cell bounding boxes, root first in construction order
    #[serde(default)]
    pub nodes: Vec<CellRecord>,

    /// Leaf points in construction order
    #[serde(default)]
    pub leaves: Vec<LeafRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_width_height() {
        let cell = CellRecord { c: 3, x1: 2.0, y1: 4.0, x2: 10.0, y2: 5.5, depth: 1 };
        assert_eq!(cell.width(), 8.0);
        assert_eq!(cell.height(), 1.5);
    }

    #[test]
    fn test_inverted_bounds_give_negative_size() {
        let cell = CellRecord { c: 0, x1: 10.0, y1: 0.0, x2: 0.0, y2: 0.0, depth: 0 };
        assert_eq!(cell.width(), -10.0);
    }

    #[test]
    fn test_leaf_classes_default_empty() {
        let leaf: LeafRecord = serde_json::from_str(r#"{"x": 1.0, "y": 2.0}"#)
            .expect("leaf without classes should deserialize");
        assert_eq!(leaf.classes, "");
    }

    #[test]
    fn test_quadtree_data_from_json() {
        let json = r#"{
            "nodes": [{"c": 1, "x1": 0, "y1": 0, "x2": 10, "y2": 10, "depth": 0}],
            "leaves": [{"x": 5, "y": 5, "classes": "a b"}]
        }"#;
        let data: QuadtreeData = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(data.nodes.len(), 1);
        assert_eq!(data.nodes[0].c, 1);
        assert_eq!(data.leaves[0].classes, "a b");
    }
}
