//! Slider and pointer wiring. Every handler updates the session first and
//! redraws after.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Document, HtmlInputElement, MouseEvent};

use super::gl::js_error;
use super::render::SharedSession;
use crate::config::{parse_slider, ParamSpec};
use crate::error::{Error, Result};
use crate::geometry::Vec2;
use crate::interaction::surface_point;

fn document() -> Result<Document> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::Js("no document".into()))
}

fn set_label(document: &Document, spec: &ParamSpec, value: f64) {
    if let Some(label) = document.get_element_by_id(spec.label_id) {
        label.set_inner_html(&value.to_string());
    }
}

/// Read each slider's starting value and redraw on `input`. Missing sliders
/// fall back to the parameter default.
pub fn bind_sliders(session: &SharedSession) -> Result<()> {
    let document = document()?;
    let params = session.borrow().demo.params();

    for spec in params {
        let Some(element) = document.get_element_by_id(spec.id) else {
            log::warn!("slider #{} not found, using {}", spec.id, spec.default);
            session.borrow_mut().demo.set_param(spec.id, spec.default)?;
            continue;
        };
        let input: HtmlInputElement = element
            .dyn_into()
            .map_err(|_| Error::MissingElement(format!("input#{}", spec.id)))?;

        let value = parse_slider(spec.id, &input.value())?;
        session.borrow_mut().demo.set_param(spec.id, value)?;
        set_label(&document, spec, value);

        let on_input = {
            let session = session.clone();
            let document = document.clone();
            let input = input.clone();
            let spec = *spec;
            Closure::wrap(Box::new(move |_: web_sys::Event| {
                let value = match parse_slider(spec.id, &input.value()) {
                    Ok(value) => value,
                    Err(err) => {
                        log::warn!("{err}");
                        return;
                    }
                };
                let mut session = session.borrow_mut();
                if let Err(err) = session.demo.set_param(spec.id, value) {
                    log::warn!("{err}");
                    return;
                }
                set_label(&document, &spec, value);
                session.redraw();
            }) as Box<dyn FnMut(_)>)
        };
        input
            .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
            .map_err(js_error)?;
        on_input.forget();
    }
    Ok(())
}

/// Pointer events on the canvas, in centred y-up coordinates. Releases are
/// taken from the whole window so a drag ending off-canvas still ends.
pub fn bind_pointer(session: &SharedSession) -> Result<()> {
    let canvas = session.borrow().canvas().clone();

    let on_down = {
        let session = session.clone();
        Closure::wrap(Box::new(move |_: MouseEvent| {
            session.borrow_mut().demo.pointer_down();
        }) as Box<dyn FnMut(_)>)
    };
    canvas
        .add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())
        .map_err(js_error)?;
    on_down.forget();

    let on_move = {
        let session = session.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let rect = canvas.get_bounding_client_rect();
            let p = surface_point(
                Vec2::new(e.client_x() as f64, e.client_y() as f64),
                (rect.left(), rect.top(), rect.width(), rect.height()),
            );
            let mut session = session.borrow_mut();
            if session.demo.pointer_move(p) {
                session.redraw();
            }
        }) as Box<dyn FnMut(_)>)
    };
    canvas
        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        .map_err(js_error)?;
    on_move.forget();

    let on_up = {
        let session = session.clone();
        Closure::wrap(Box::new(move |_: MouseEvent| {
            session.borrow_mut().demo.pointer_up();
        }) as Box<dyn FnMut(_)>)
    };
    window()
        .ok_or_else(|| Error::Js("no window".into()))?
        .add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())
        .map_err(js_error)?;
    on_up.forget();

    Ok(())
}
