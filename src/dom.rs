use crate::constants::*;
use hearts_core::Viewport;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!(format!("{:?}", e))
}

/// Viewport size in CSS pixels and the device pixel ratio, read once.
pub fn read_viewport(window: &web::Window) -> anyhow::Result<Viewport> {
    let width = window
        .inner_width()
        .map_err(js_err)?
        .as_f64()
        .ok_or_else(|| anyhow::anyhow!("innerWidth is not a number"))?;
    let height = window
        .inner_height()
        .map_err(js_err)?
        .as_f64()
        .ok_or_else(|| anyhow::anyhow!("innerHeight is not a number"))?;
    Ok(Viewport::new(
        width as f32,
        height as f32,
        window.device_pixel_ratio() as f32,
    ))
}

pub fn query_seed(window: &web::Window) -> Option<u64> {
    let search = window.location().search().ok()?;
    let params = web::UrlSearchParams::new_with_str(&search).ok()?;
    let raw = params.get(SEED_QUERY_PARAM)?;
    match raw.parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            log::warn!("[dom] ignoring non-numeric seed {:?}", raw);
            None
        }
    }
}

/// Append a container with a full-viewport canvas to `document.body`.
///
/// The backing store is sized in physical pixels and the CSS box in
/// logical pixels, so the canvas stays sharp on high-DPI screens.
pub fn mount_canvas(
    document: &web::Document,
    viewport: &Viewport,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    let container = document.create_element("div").map_err(js_err)?;
    container.set_id(CONTAINER_ID);
    body.append_child(&container).map_err(js_err)?;

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id(CANVAS_ID);
    let (width_px, height_px) = viewport.physical_size();
    canvas.set_width(width_px);
    canvas.set_height(height_px);
    let style = canvas.style();
    style
        .set_property("width", &format!("{}px", viewport.width))
        .map_err(js_err)?;
    style
        .set_property("height", &format!("{}px", viewport.height))
        .map_err(js_err)?;
    style.set_property("display", "block").map_err(js_err)?;
    container.append_child(&canvas).map_err(js_err)?;
    Ok(canvas)
}
