//! Small interactive WebGL2 visualizations: a circle outline, an eigenvector
//! explorer, a Gauss-Seidel trace, a sine plot, translated and dragged
//! arrows, and triangles.
//!
//! All geometry and demo state is plain Rust and testable on the host; only
//! the `wasm` module touches the browser.

pub mod config;
pub mod demos;
pub mod error;
pub mod gauss_seidel;
pub mod geometry;
pub mod interaction;
pub mod plot;
pub mod scene;

pub use error::{Error, Result};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::Error;

    mod controls;
    mod gl;
    mod render;

    impl From<Error> for JsValue {
        fn from(err: Error) -> Self {
            JsValue::from_str(&err.to_string())
        }
    }

    fn start_canvas(canvas: web_sys::HtmlCanvasElement) -> Result<(), JsValue> {
        render::start(canvas).map_err(|err| {
            // Setup failures are terminal for that canvas only.
            log::error!("{err}");
            JsValue::from(err)
        })
    }

    /// Starts every `<canvas data-demo="…">` on the page.
    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvases = document.query_selector_all("canvas[data-demo]")?;
        if canvases.length() == 0 {
            log::warn!("no canvas[data-demo] on this page");
        }
        for i in 0..canvases.length() {
            let Some(node) = canvases.get(i) else {
                continue;
            };
            let canvas = node.dyn_into::<web_sys::HtmlCanvasElement>()?;
            // One broken demo should not keep the others from starting.
            start_canvas(canvas).ok();
        }
        Ok(())
    }

    /// Starts the demo on one canvas, for pages that create canvases later.
    #[wasm_bindgen]
    pub fn start_demo(canvas_id: &str) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| Error::MissingElement(canvas_id.to_owned()))?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        start_canvas(canvas)
    }
}
