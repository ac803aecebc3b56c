mod utils;
pub mod animation;
pub mod color;
pub mod config;
pub mod driver;
pub mod motion;
pub mod particle;
pub mod population;
pub mod renderer;
pub mod viewport;

use animation::Animation;
use config::{CANVAS_SELECTOR, PARTICLE_SIZE, QUANTITY};
use renderer::Renderer;
use viewport::ViewportTracker;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Entry point, runs when the module is instantiated. Without a
// `.canvas-background` canvas that has a 2d context this does nothing.
#[wasm_bindgen(start)]
pub fn initialize() -> Result<(), JsValue> {
    utils::set_panic_hook();
    utils::init_logging();

    let window = web_sys::window().ok_or_else(|| js_sys::Error::new("no global `window`"))?;
    let document = window
        .document()
        .ok_or_else(|| js_sys::Error::new("window has no document"))?;

    let canvas = match document.query_selector(CANVAS_SELECTOR)? {
        Some(element) => match element.dyn_into::<HtmlCanvasElement>() {
            Ok(canvas) => canvas,
            Err(_) => {
                log::debug!("{} is not a canvas, skipping", CANVAS_SELECTOR);
                return Ok(());
            }
        },
        None => {
            log::debug!("no {} element, skipping", CANVAS_SELECTOR);
            return Ok(());
        }
    };
    let context = match canvas.get_context("2d")? {
        Some(context) => context.dyn_into::<CanvasRenderingContext2d>()?,
        None => {
            log::debug!("canvas has no 2d context, skipping");
            return Ok(());
        }
    };

    let (renderer, tracker) = attach(&window, canvas, context)?;

    let mut rng = rand::thread_rng();
    let particles =
        population::create_population(QUANTITY, PARTICLE_SIZE, tracker.current(), &mut rng);
    let viewport = tracker.current();
    log::info!(
        "{} particles on a {}x{} canvas",
        particles.len(),
        viewport.width,
        viewport.height
    );

    driver::run(window, Animation::new(particles, renderer, tracker.shared(), rng))
}

// Sets up drawing and resize tracking for a canvas. The renderer asks for
// destination-over before the first resize, and that resize resets the
// context back to source-over. Every later resize resets it again, so all
// frames are drawn source-over. Keep this order: it is what gives the
// fading trails.
pub fn attach(
    window: &Window,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
) -> Result<(Renderer<CanvasRenderingContext2d>, ViewportTracker), JsValue> {
    let renderer = Renderer::new(context)?;
    let tracker = ViewportTracker::new(window.clone(), canvas);
    tracker.listen()?;
    tracker.on_resize()?;
    Ok((renderer, tracker))
}
