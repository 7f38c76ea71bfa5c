//! SVG rendering output
//!
//! This module renders a DisplayList as a standalone SVG document:
//! one `<rect>` per quadtree cell followed by one `<circle>` per leaf
//! point, inside an `<svg>` root of the configured canvas size.

pub mod builder;

pub use builder::SvgBuilder;

use crate::scene::DisplayList;

/// SVG document renderer
pub struct SvgRenderer;

impl SvgRenderer {
    /// Render a display list as an SVG document string.
    ///
    /// Rects are emitted before circles so points paint on top, matching
    /// the two sequential append passes of the display-list computation.
    pub fn render(display_list: &DisplayList) -> String {
        log::debug!(
            "render_svg: {} rects, {} points",
            display_list.rects.len(),
            display_list.points.len()
        );

        let mut builder = SvgBuilder::new();
        builder.open_svg(display_list.width, display_list.height);
        for rect in &display_list.rects {
            builder.rect(rect);
        }
        for point in &display_list.points {
            builder.circle(point);
        }
        builder.finish()
    }
}
