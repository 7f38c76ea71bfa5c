//! DOM rendering output
//!
//! Builds the SVG element tree directly in the browser document: an
//! `<svg>` root appended to a parent element, one `<rect>` child per
//! quadtree cell and one `<circle>` per leaf point. This is the in-page
//! equivalent of the string renderer in `svg`.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::scene::{DisplayList, RenderPoint, RenderRect};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// In-document SVG element renderer
pub struct DomRenderer;

impl DomRenderer {
    /// Append the display list to `parent` as an `<svg>` element tree.
    ///
    /// Rect elements are appended before circles so points paint on top.
    /// Returns the created `<svg>` root.
    pub fn paint(
        document: &Document,
        parent: &Element,
        display_list: &DisplayList,
    ) -> Result<Element, JsValue> {
        let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
        svg.set_attribute("width", &display_list.width.to_string())?;
        svg.set_attribute("height", &display_list.height.to_string())?;

        for rect in &display_list.rects {
            let el = Self::rect_element(document, rect)?;
            svg.append_child(&el)?;
        }
        for point in &display_list.points {
            let el = Self::circle_element(document, point)?;
            svg.append_child(&el)?;
        }

        parent.append_child(&svg)?;
        Ok(svg)
    }

    fn rect_element(document: &Document, rect: &RenderRect) -> Result<Element, JsValue> {
        let el = document.create_element_ns(Some(SVG_NS), "rect")?;
        el.set_attribute("id", &rect.id)?;
        el.set_attribute("class", &rect.class_attr())?;
        el.set_attribute("x", &rect.x.to_string())?;
        el.set_attribute("y", &rect.y.to_string())?;
        el.set_attribute("width", &rect.w.to_string())?;
        el.set_attribute("height", &rect.h.to_string())?;
        if let Some(fill) = &rect.fill {
            el.set_attribute("fill", fill)?;
        }
        el.set_attribute("style", &format!("opacity:{}", rect.opacity))?;
        Ok(el)
    }

    fn circle_element(document: &Document, point: &RenderPoint) -> Result<Element, JsValue> {
        let el = document.create_element_ns(Some(SVG_NS), "circle")?;
        el.set_attribute("class", &point.class_attr())?;
        el.set_attribute("cx", &point.cx.to_string())?;
        el.set_attribute("cy", &point.cy.to_string())?;
        el.set_attribute("r", &point.r.to_string())?;
        Ok(el)
    }
}
