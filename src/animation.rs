// One running dot field: the particles, what they are drawn on, and the
// viewport they bounce inside

use crate::motion;
use crate::particle::Particle;
use crate::renderer::{Renderer, Surface};
use crate::viewport::SharedViewport;
use rand::Rng;
use wasm_bindgen::prelude::*;

pub struct Animation<S: Surface, R: Rng> {
    pub particles: Vec<Particle>,
    renderer: Renderer<S>,
    viewport: SharedViewport,
    rng: R,
}

impl<S: Surface, R: Rng> Animation<S, R> {
    pub fn new(
        particles: Vec<Particle>,
        renderer: Renderer<S>,
        viewport: SharedViewport,
        rng: R,
    ) -> Self {
        Animation {
            particles,
            renderer,
            viewport,
            rng,
        }
    }

    // Move everything, then draw it. The viewport is read once per frame so
    // both halves use the same size.
    pub fn tick(&mut self) -> Result<(), JsValue> {
        #[cfg(feature = "profile")]
        let _timer = crate::utils::Timer::new("Animation::tick");
        let viewport = self.viewport.get();
        motion::step(&mut self.particles, viewport, &mut self.rng);
        self.renderer.render(&self.particles, viewport)
    }
}
