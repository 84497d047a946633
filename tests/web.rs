#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use webgl_viz::demos::{self, Demo};
use webgl_viz::config::DemoKind;
use webgl_viz::geometry::Vec2;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn webgl2_context_is_available() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    assert!(canvas.get_context("webgl2").unwrap().is_some());
}

#[wasm_bindgen_test]
fn scenes_build_in_the_browser() {
    let surface = Vec2::new(320.0, 240.0);
    for kind in DemoKind::ALL {
        let scene = demos::create(kind).scene(surface);
        assert!(!scene.calls.is_empty(), "{kind}");
    }
}
