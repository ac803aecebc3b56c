// Particle struct that keeps track of position, direction and color for one dot,
// plus the direction re-roll used when two dots touch

use crate::config::REJECTED_DEGREES;
use rand::Rng;
use std::f64::consts::PI;

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: [f64; 2],
    // Where the particle was before the last motion step, the renderer
    // starts its path here
    pub previous_position: [f64; 2],
    pub size: f64,
    pub direction_x: f64,
    pub direction_y: f64,
    pub speed: f64,
    // Spawn point, never read after creation
    pub target_x: f64,
    pub target_y: f64,
    // Always zero
    pub depth: i32,
    pub index: usize,
    pub fill_color: String,
}

impl Particle {
    pub fn new(
        index: usize,
        position: [f64; 2],
        size: f64,
        direction: [f64; 2],
        speed: f64,
        fill_color: String,
    ) -> Particle {
        Particle {
            position,
            previous_position: position,
            size,
            direction_x: direction[0],
            direction_y: direction[1],
            speed,
            target_x: position[0],
            target_y: position[1],
            depth: 0,
            index,
            fill_color,
        }
    }

    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }

    // Point the particle somewhere new without changing its speed.
    // The angle is d * 180 / PI rather than d * PI / 180; the jittery look of
    // the bounces depends on it.
    pub fn randomise_direction<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let r = bounce_angle(draw_bounce_degree(rng));
        self.direction_x = r.sin() * self.speed;
        self.direction_y = r.cos() * self.speed;
    }

    // Position moves against the direction vector
    pub fn integrate(&mut self) {
        self.previous_position = self.position;
        self.position[0] -= self.direction_x;
        self.position[1] -= self.direction_y;
    }
}

pub fn draw_bounce_degree<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    loop {
        let d = rng.gen_range(0u32, 360u32);
        if !REJECTED_DEGREES.contains(&d) {
            return d;
        }
    }
}

pub fn bounce_angle(degree: u32) -> f64 {
    degree as f64 * 180.0 / PI
}
