//! Rendering API operations
//!
//! JavaScript passes the quadtree output (`{nodes, leaves}`) and an
//! optional partial paint configuration as plain objects; missing config
//! fields are filled from defaults via serde.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize, to_js_error};
use crate::models::core::QuadtreeData;
use crate::renderers::dom::DomRenderer;
use crate::renderers::svg::SvgRenderer;
use crate::scene::{PaintConfig, PaintEngine};

fn parse_inputs(data: JsValue, config: JsValue) -> Result<(QuadtreeData, PaintConfig), JsValue> {
    let data: QuadtreeData = deserialize(data, "Failed to deserialize quadtree data")?;
    let config: PaintConfig = if config.is_undefined() || config.is_null() {
        PaintConfig::default()
    } else {
        deserialize(config, "Failed to deserialize paint config")?
    };
    Ok((data, config))
}

/// Compute the display list for a quadtree.
///
/// Returns `{width, height, rects, points}` with all attribute values
/// ready for DOM binding.
#[wasm_bindgen]
pub fn compute_display_list(data: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let (data, config) = parse_inputs(data, config)?;
    let display_list = PaintEngine::new()
        .compute_display_list(&data, &config)
        .map_err(|e| to_js_error(e, "Failed to compute display list"))?;
    serialize(&display_list, "Failed to serialize display list")
}

/// Render a quadtree straight to an SVG document string.
#[wasm_bindgen]
pub fn render_svg(data: JsValue, config: JsValue) -> Result<String, JsValue> {
    let (data, config) = parse_inputs(data, config)?;
    let display_list = PaintEngine::new()
        .compute_display_list(&data, &config)
        .map_err(|e| to_js_error(e, "Failed to compute display list"))?;
    Ok(SvgRenderer::render(&display_list))
}

/// Paint a quadtree into the page: appends an `<svg>` element tree to
/// `parent` and returns the created root element.
#[wasm_bindgen]
pub fn paint_quadtree(
    data: JsValue,
    config: JsValue,
    parent: web_sys::Element,
) -> Result<web_sys::Element, JsValue> {
    let (data, config) = parse_inputs(data, config)?;
    let display_list = PaintEngine::new()
        .compute_display_list(&data, &config)
        .map_err(|e| to_js_error(e, "Failed to compute display list"))?;

    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window available"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    DomRenderer::paint(&document, &parent, &display_list)
}

/// The default paint configuration, for callers that want to inspect or
/// patch it before rendering.
#[wasm_bindgen]
pub fn default_paint_config() -> Result<JsValue, JsValue> {
    serialize(&PaintConfig::default(), "Failed to serialize paint config")
}
