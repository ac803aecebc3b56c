// Renderer that paints the dot field onto a 2d canvas context.
// Each frame paints a translucent black layer over the previous frames, then
// fills every particle, so older positions fade out gradually into trails.
// Resizing the canvas resets the context to source-over, which is the mode
// every frame is actually drawn with.

use crate::config::TRAIL_ALPHA;
use crate::particle::Particle;
use crate::viewport::Viewport;
use std::f64::consts::PI;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

// The handful of 2d context calls the renderer needs
pub trait Surface {
    fn set_composite_operation(&self, operation: &str) -> Result<(), JsValue>;
    fn set_fill_style(&self, style: &str);
    fn set_line_width(&self, width: f64);
    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&self);
    fn move_to(&self, x: f64, y: f64);
    fn arc(
        &self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> Result<(), JsValue>;
    fn close_path(&self);
    fn fill(&self);
}

impl Surface for CanvasRenderingContext2d {
    fn set_composite_operation(&self, operation: &str) -> Result<(), JsValue> {
        self.set_global_composite_operation(operation)
    }

    fn set_fill_style(&self, style: &str) {
        #[allow(deprecated)]
        CanvasRenderingContext2d::set_fill_style(self, &JsValue::from_str(style));
    }

    fn set_line_width(&self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
    }

    fn begin_path(&self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn arc(
        &self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> Result<(), JsValue> {
        self.arc_with_anticlockwise(x, y, radius, start_angle, end_angle, anticlockwise)
    }

    fn close_path(&self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn fill(&self) {
        CanvasRenderingContext2d::fill(self);
    }
}

pub struct Renderer<S: Surface> {
    pub surface: S,
    fade_style: String,
}

impl<S: Surface> Renderer<S> {
    // Asks for destination-over. The setting only lasts until the canvas is
    // next resized, and startup always resizes before the first frame.
    pub fn new(surface: S) -> Result<Self, JsValue> {
        surface.set_composite_operation("destination-over")?;
        Ok(Renderer {
            surface,
            fade_style: format!("rgba(0,0,0,{})", TRAIL_ALPHA),
        })
    }

    pub fn render(&self, particles: &[Particle], viewport: Viewport) -> Result<(), JsValue> {
        self.fade(viewport);
        for particle in particles {
            self.draw_particle(particle)?;
        }
        Ok(())
    }

    pub fn fade(&self, viewport: Viewport) {
        self.surface.set_fill_style(&self.fade_style);
        self.surface.fill_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    // The path starts at the pre-motion point; only fill is called so the
    // connecting segment never shows.
    pub fn draw_particle(&self, particle: &Particle) -> Result<(), JsValue> {
        let [from_x, from_y] = particle.previous_position;
        let [x, y] = particle.position;
        self.surface.begin_path();
        self.surface.set_fill_style(&particle.fill_color);
        self.surface.set_line_width(particle.size);
        self.surface.move_to(from_x, from_y);
        self.surface.arc(x, y, particle.radius(), 0.0, PI * 2.0, true)?;
        self.surface.close_path();
        self.surface.fill();
        Ok(())
    }
}
