//! Paint engine
//!
//! The main entry point for display-list computation: one synchronous pass
//! over the cell records, then one over the leaf records, producing one
//! shape per record in input order. Malformed geometry (NaN, inverted
//! bounds) flows through unchanged; this is display-only and the engine
//! carries no validation layer.

use serde::{Deserialize, Serialize};

use super::color::{ColorScale, ColorScaleConfig, ScaleError};
use super::display_list::{DisplayList, RenderPoint, RenderRect};
use crate::models::core::QuadtreeData;

/// Configuration for display-list computation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PaintConfig {
    /// Canvas width in pixels
    pub width: f64,

    /// Canvas height in pixels
    pub height: f64,

    /// Radius applied to every leaf point
    pub point_radius: f64,

    /// Prefix for rect element ids ("node_" + cell identifier)
    pub node_id_prefix: String,

    /// Base CSS class for cell rects
    pub node_class: String,

    /// Base CSS class for leaf circles
    pub point_class: String,

    /// Initial opacity for cell rects; cells start invisible and external
    /// animation code fades them in
    pub node_opacity: f64,

    /// When set, each rect gets a depth-based fill from the color scale
    pub fill_by_depth: bool,

    /// Depth-to-color scale used when fill_by_depth is set
    pub depth_scale: ColorScaleConfig,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            point_radius: 3.0,
            node_id_prefix: "node_".to_string(),
            node_class: "node".to_string(),
            point_class: "point".to_string(),
            node_opacity: 0.0,
            fill_by_depth: false,
            depth_scale: ColorScaleConfig::default(),
        }
    }
}

/// Main engine for computing display lists
pub struct PaintEngine;

impl PaintEngine {
    /// Create a new paint engine
    pub fn new() -> Self {
        Self
    }

    /// Compute the complete display list for a quadtree.
    ///
    /// This is the main entry point: it takes the record sequences handed
    /// over by the quadtree builder plus the paint configuration, and
    /// returns a DisplayList with one rect per cell and one circle per
    /// leaf, ready for attribute binding.
    ///
    /// # Errors
    /// Fails only when `fill_by_depth` is set and the configured scale
    /// range is not parseable hex.
    pub fn compute_display_list(
        &self,
        data: &QuadtreeData,
        config: &PaintConfig,
    ) -> Result<DisplayList, ScaleError> {
        log::debug!(
            "compute_display_list: {} cells, {} leaves",
            data.nodes.len(),
            data.leaves.len()
        );

        let depth_scale = if config.fill_by_depth {
            Some(ColorScale::try_from(&config.depth_scale)?)
        } else {
            None
        };

        let rects = data
            .nodes
            .iter()
            .map(|cell| RenderRect {
                id: format!("{}{}", config.node_id_prefix, cell.c),
                classes: vec![config.node_class.clone()],
                x: cell.x1,
                y: cell.y1,
                w: cell.width(),
                h: cell.height(),
                opacity: config.node_opacity,
                fill: depth_scale
                    .as_ref()
                    .map(|scale| scale.hex_at(f64::from(cell.depth))),
            })
            .collect();

        let points = data
            .leaves
            .iter()
            .map(|leaf| {
                let mut classes = vec![config.point_class.clone()];
                classes.extend(leaf.classes.split_whitespace().map(str::to_string));
                RenderPoint {
                    classes,
                    cx: leaf.x,
                    cy: leaf.y,
                    r: config.point_radius,
                }
            })
            .collect();

        Ok(DisplayList {
            width: config.width,
            height: config.height,
            rects,
            points,
        })
    }
}

impl Default for PaintEngine {
    fn default() -> Self {
        Self::new()
    }
}
