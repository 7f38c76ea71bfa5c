// SVG document builder

use crate::scene::{RenderPoint, RenderRect};

/// Escape a string for use inside a double-quoted XML attribute.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// State machine for building SVG documents
pub struct SvgBuilder {
    buffer: String,
    root_open: bool,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            root_open: false,
        }
    }

    /// Open the `<svg>` root element with the canvas dimensions.
    pub fn open_svg(&mut self, width: f64, height: f64) {
        self.buffer.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.buffer.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
            width, height
        ));
        self.root_open = true;
    }

    /// Write one cell rectangle.
    pub fn rect(&mut self, rect: &RenderRect) {
        self.buffer.push_str(&format!(
            "  <rect id=\"{}\" class=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
            escape_attr(&rect.id),
            escape_attr(&rect.class_attr()),
            rect.x,
            rect.y,
            rect.w,
            rect.h
        ));
        if let Some(fill) = &rect.fill {
            self.buffer.push_str(&format!(" fill=\"{}\"", escape_attr(fill)));
        }
        self.buffer.push_str(&format!(" style=\"opacity:{}\"/>\n", rect.opacity));
    }

    /// Write one leaf circle.
    pub fn circle(&mut self, point: &RenderPoint) {
        self.buffer.push_str(&format!(
            "  <circle class=\"{}\" cx=\"{}\" cy=\"{}\" r=\"{}\"/>\n",
            escape_attr(&point.class_attr()),
            point.cx,
            point.cy,
            point.r
        ));
    }

    /// Close the root element and return the document.
    pub fn finish(mut self) -> String {
        if self.root_open {
            self.buffer.push_str("</svg>\n");
            self.root_open = false;
        }
        self.buffer
    }
}

impl Default for SvgBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("a & <b> \"c\""), "a &amp; &lt;b&gt; &quot;c&quot;");
        assert_eq!(escape_attr("plain"), "plain");
    }

    #[test]
    fn test_integral_coordinates_render_without_fraction() {
        let mut builder = SvgBuilder::new();
        builder.open_svg(800.0, 600.0);
        let svg = builder.finish();
        assert!(svg.contains("width=\"800\""));
        assert!(svg.contains("height=\"600\""));
    }

    #[test]
    fn test_fractional_coordinates_preserved() {
        let mut builder = SvgBuilder::new();
        builder.open_svg(10.0, 10.0);
        builder.circle(&RenderPoint {
            classes: vec!["point".to_string()],
            cx: 2.5,
            cy: 7.25,
            r: 3.0,
        });
        let svg = builder.finish();
        assert!(svg.contains("cx=\"2.5\""));
        assert!(svg.contains("cy=\"7.25\""));
        assert!(svg.contains("r=\"3\""));
    }
}
