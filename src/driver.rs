// Frame loop on requestAnimationFrame. The first frame is drawn right away,
// then the callback holds a handle to itself so it can ask for the next one;
// it runs until the page goes away.

use crate::animation::Animation;
use crate::renderer::Surface;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_animation_frame(
    window: &Window,
    callback: &Closure<dyn FnMut()>,
) -> Result<i32, JsValue> {
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}

pub fn run<S, R>(window: Window, mut animation: Animation<S, R>) -> Result<(), JsValue>
where
    S: Surface + 'static,
    R: Rng + 'static,
{
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let next = Rc::clone(&frame);
    let loop_window = window.clone();

    if let Err(err) = animation.tick() {
        log::error!("frame failed: {:?}", err);
    }

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(err) = animation.tick() {
            log::error!("frame failed: {:?}", err);
        }
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_animation_frame(&loop_window, callback) {
                log::error!("could not schedule next frame: {:?}", err);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = frame.borrow().as_ref() {
        request_animation_frame(&window, callback)?;
    }
    Ok(())
}
