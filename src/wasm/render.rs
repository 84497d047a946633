use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, HtmlCanvasElement};

use super::controls;
use super::gl::{self, js_error, Renderer};
use crate::config::DemoKind;
use crate::demos::{self, Demo};
use crate::error::{Error, Result};
use crate::geometry::Vec2;

/// One running visualization: its state, its canvas and its GL resources.
pub struct Session {
    pub demo: Box<dyn Demo>,
    canvas: HtmlCanvasElement,
    renderer: Renderer,
}

pub type SharedSession = Rc<RefCell<Session>>;

impl Session {
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn redraw(&self) {
        let surface = Vec2::new(self.canvas.width() as f64, self.canvas.height() as f64);
        let scene = self.demo.scene(surface);
        self.renderer.draw(&scene, surface);
    }
}

/// Size the drawing buffer to the canvas' container.
fn fit_to_container(canvas: &HtmlCanvasElement) {
    let Some(parent) = canvas.parent_element() else {
        return;
    };
    let (w, h) = (parent.client_width(), parent.client_height());
    if w > 0 && h > 0 {
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
    }
}

/// Set up the demo named by the canvas' `data-demo` attribute and draw it.
pub fn start(canvas: HtmlCanvasElement) -> Result<()> {
    let kind: DemoKind = canvas
        .get_attribute("data-demo")
        .ok_or_else(|| Error::MissingElement(format!("{}[data-demo]", canvas.id())))?
        .parse()?;

    fit_to_container(&canvas);
    let renderer = Renderer::new(gl::context(&canvas)?)?;
    log::debug!("{kind}: program linked, canvas {}x{}", canvas.width(), canvas.height());

    let session: SharedSession = Rc::new(RefCell::new(Session {
        demo: demos::create(kind),
        canvas: canvas.clone(),
        renderer,
    }));

    controls::bind_sliders(&session)?;
    if session.borrow().demo.wants_pointer() {
        controls::bind_pointer(&session)?;
    }

    // Refit and redraw when the page layout changes.
    let resize_closure = {
        let session = session.clone();
        Closure::wrap(Box::new(move || {
            let session = session.borrow();
            fit_to_container(session.canvas());
            session.redraw();
        }) as Box<dyn FnMut()>)
    };
    window()
        .ok_or_else(|| Error::Js("no window".into()))?
        .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    resize_closure.forget();

    session.borrow().redraw();
    log::info!("{kind} ready");
    Ok(())
}
