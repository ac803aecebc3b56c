// Window size tracking. The current size lives in a shared cell so the resize
// listener and the frame loop see the same value without globals.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }

    // Reads innerWidth/innerHeight, a non-numeric value counts as 0
    pub fn from_window(window: &Window) -> Result<Self, JsValue> {
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        Ok(Viewport { width, height })
    }

    // True when a particle of `size` centred at `pos` touches or crosses the
    // left/right edge
    pub fn outside_x(&self, pos: f64, size: f64) -> bool {
        pos <= size / 2.0 || pos >= self.width - size / 2.0
    }

    pub fn outside_y(&self, pos: f64, size: f64) -> bool {
        pos <= size / 2.0 || pos >= self.height - size / 2.0
    }
}

pub type SharedViewport = Rc<Cell<Viewport>>;

#[derive(Clone)]
pub struct ViewportTracker {
    window: Window,
    canvas: HtmlCanvasElement,
    current: SharedViewport,
}

impl ViewportTracker {
    pub fn new(window: Window, canvas: HtmlCanvasElement) -> Self {
        ViewportTracker {
            window,
            canvas,
            current: Rc::new(Cell::new(Viewport::new(0.0, 0.0))),
        }
    }

    pub fn current(&self) -> Viewport {
        self.current.get()
    }

    pub fn shared(&self) -> SharedViewport {
        Rc::clone(&self.current)
    }

    // Re-read the window size and make the canvas backing store match it
    pub fn on_resize(&self) -> Result<(), JsValue> {
        let viewport = Viewport::from_window(&self.window)?;
        self.canvas.set_width(viewport.width as u32);
        self.canvas.set_height(viewport.height as u32);
        self.current.set(viewport);
        log::debug!("viewport resized to {}x{}", viewport.width, viewport.height);
        Ok(())
    }

    // Registers on_resize for window resize events. The listener lives as
    // long as the page.
    pub fn listen(&self) -> Result<(), JsValue> {
        let tracker = self.clone();
        let handler = Closure::wrap(Box::new(move || {
            if let Err(err) = tracker.on_resize() {
                log::error!("resize failed: {:?}", err);
            }
        }) as Box<dyn FnMut()>);
        self.window
            .add_event_listener_with_callback("resize", handler.as_ref().unchecked_ref())?;
        handler.forget();
        Ok(())
    }
}
